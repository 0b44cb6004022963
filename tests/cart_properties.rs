use proptest::prelude::*;
use proptest::test_runner::Config;
use silk_storefront::{catalog, filter_and_sort, Cart, Category, Collection, FilterState, SortKey};

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    SetQuantity(usize, i64),
    Increment(usize),
    Decrement(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    let product = 0..catalog().len();
    prop_oneof![
        4 => product.clone().prop_map(Op::Add),
        1 => product.clone().prop_map(Op::Remove),
        2 => (product.clone(), -2_i64..6).prop_map(|(p, q)| Op::SetQuantity(p, q)),
        2 => product.clone().prop_map(Op::Increment),
        2 => product.prop_map(Op::Decrement),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut Cart, op: &Op) {
    let id = |i: usize| catalog()[i].id.as_str();
    match *op {
        Op::Add(i) => cart.add_to_cart(&catalog()[i]),
        Op::Remove(i) => cart.remove_from_cart(id(i)),
        Op::SetQuantity(i, q) => cart.update_quantity(id(i), q),
        Op::Increment(i) => cart.increment(id(i)),
        Op::Decrement(i) => cart.decrement(id(i)),
        Op::Clear => cart.clear(),
    }
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    let category = proptest::option::of(proptest::sample::select(Category::ALL.to_vec()));
    let collection = proptest::option::of(proptest::sample::select(Collection::ALL.to_vec()));
    let sort = proptest::sample::select(vec![SortKey::Newest, SortKey::PriceAsc, SortKey::PriceDesc]);
    (category, collection, sort).prop_map(|(category, collection, sort)| FilterState {
        category,
        collection,
        sort,
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn totals_always_match_lines(ops in proptest::collection::vec(op(), 0..40)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);

            let items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
            let price: u64 = cart.lines().iter().map(|l| l.subtotal()).sum();
            prop_assert_eq!(cart.total_items(), items);
            prop_assert_eq!(cart.total_price(), price);
            prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));

            let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    #[test]
    fn decrement_never_drops_a_line(index in 0..8_usize, adds in 1..5_u32, decs in 0..10_u32) {
        let product = &catalog()[index];
        let mut cart = Cart::new();
        for _ in 0..adds {
            cart.add_to_cart(product);
        }
        for _ in 0..decs {
            cart.decrement(&product.id);
        }
        let line = cart.line(&product.id);
        prop_assert!(line.is_some());
        prop_assert_eq!(line.map(|l| l.quantity), Some(adds.saturating_sub(decs).max(1)));
    }

    #[test]
    fn filter_and_sort_is_an_ordered_subset(state in filter_state()) {
        let view = filter_and_sort(catalog(), &state);

        prop_assert!(view.iter().all(|p| state.matches(p)));
        let expected = catalog().iter().filter(|p| state.matches(p)).count();
        prop_assert_eq!(view.len(), expected);

        for pair in view.windows(2) {
            match state.sort {
                SortKey::PriceAsc => prop_assert!(pair[0].price <= pair[1].price),
                SortKey::PriceDesc => prop_assert!(pair[0].price >= pair[1].price),
                SortKey::Newest => prop_assert!(pair[0].is_new || !pair[1].is_new),
            }
        }
    }
}
