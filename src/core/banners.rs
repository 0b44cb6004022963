//! Homepage and festival banners for the back-office.
//!
//! Like the catalog editors, [`BannerBoard`] is an in-memory copy seeded with
//! the shop's banners. Changes last as long as the value and are not persisted.

use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BannerKind {
    Hero,
    Festival,
}

impl BannerKind {
    pub const ALL: [BannerKind; 2] = [BannerKind::Hero, BannerKind::Festival];

    pub fn label(self) -> &'static str {
        match self {
            BannerKind::Hero => "Hero Banners",
            BannerKind::Festival => "Festival Banners",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: Option<String>,
    pub kind: BannerKind,
    pub enabled: bool,
}

impl Banner {
    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "Active"
        } else {
            "Disabled"
        }
    }
}

fn seed(
    id: &str,
    title: &str,
    subtitle: &str,
    image: Option<&str>,
    kind: BannerKind,
    enabled: bool,
) -> Banner {
    Banner {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image_url: image.map(str::to_string),
        kind,
        enabled,
    }
}

pub fn seed_banners() -> Vec<Banner> {
    vec![
        seed(
            "b1",
            "Bridal Collection 2024",
            "Timeless elegance for your special day",
            Some("/src/assets/hero-banner-1.jpg"),
            BannerKind::Hero,
            true,
        ),
        seed(
            "b2",
            "Festival Special",
            "Celebrate in style with our finest silks",
            Some("/src/assets/hero-banner-2.jpg"),
            BannerKind::Hero,
            true,
        ),
        seed(
            "b3",
            "Pongal Collection",
            "Exquisite sarees for Pongal celebrations",
            None,
            BannerKind::Festival,
            false,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerBoard {
    banners: Vec<Banner>,
}

impl Default for BannerBoard {
    fn default() -> Self {
        Self {
            banners: seed_banners(),
        }
    }
}

impl BannerBoard {
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn of_kind(&self, kind: BannerKind) -> Vec<&Banner> {
        self.banners.iter().filter(|b| b.kind == kind).collect()
    }

    /// Append an enabled banner. A blank title changes nothing and returns `None`.
    pub fn add(&mut self, title: &str, subtitle: &str, kind: BannerKind) -> Option<String> {
        if title.trim().is_empty() {
            return None;
        }

        let mut id = format!("b-{}", Utc::now().timestamp_millis());
        while self.banners.iter().any(|b| b.id == id) {
            id.push('x');
        }

        self.banners.push(Banner {
            id: id.clone(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image_url: None,
            kind,
            enabled: true,
        });
        Some(id)
    }

    /// Flip `enabled`; `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let banner = self.banners.iter_mut().find(|b| b.id == id)?;
        banner.enabled = !banner.enabled;
        Some(banner.enabled)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }
}
