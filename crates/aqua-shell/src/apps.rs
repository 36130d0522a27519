//! Built-in content providers.
//!
//! Each provider describes the window(s) it opens: title, size policy and
//! (for About) the fixed trio placement. The article list also carries the
//! badge scoring used to order posts.

use aqua_wm::WindowSpec;

/// Launchable apps, in dock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    About,
    Articles,
    Photos,
    Secret,
    Trash,
}

impl AppKind {
    pub const ALL: [AppKind; 5] = [
        AppKind::About,
        AppKind::Articles,
        AppKind::Photos,
        AppKind::Secret,
        AppKind::Trash,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppKind::About => "About",
            AppKind::Articles => "Articles",
            AppKind::Photos => "Photos",
            AppKind::Secret => "Secret",
            AppKind::Trash => "Trash",
        }
    }
}

/// Opaque window payload: tells the shell what to paint in the content area.
#[derive(Debug, Clone, PartialEq)]
pub enum AppContent {
    AboutPanel,
    Articles(Vec<Article>),
    Photos,
    Secret,
    Trash,
}

/// One member of the About trio: title plus position as a fraction of the
/// container. All three are fixed-square windows.
pub struct AboutPanelSpec {
    pub title: &'static str,
    pub left_frac: f32,
    pub top_frac: f32,
}

/// The About trio, in creation order: "About Me" is created last so it
/// lands on top of the other two.
pub const ABOUT_TRIO: [AboutPanelSpec; 3] = [
    AboutPanelSpec {
        title: "Portfolio Showcase",
        left_frac: 0.05,
        top_frac: 0.25,
    },
    AboutPanelSpec {
        title: "Design Cases",
        left_frac: 0.22,
        top_frac: 0.40,
    },
    AboutPanelSpec {
        title: "About Me",
        left_frac: 0.15,
        top_frac: 0.15,
    },
];

pub const ARTICLES_TITLE: &str = "Articles";
pub const PHOTOS_TITLE: &str = "Photos";
pub const SECRET_TITLE: &str = "Secret";
pub const TRASH_TITLE: &str = "Trash";

pub fn articles_spec() -> WindowSpec {
    WindowSpec::new(ARTICLES_TITLE)
        .with_size(800.0, 600.0)
        .with_aspect(800.0, 600.0)
        .with_min_height(300.0)
}

pub fn photos_spec() -> WindowSpec {
    WindowSpec::new(PHOTOS_TITLE)
        .with_size(800.0, 600.0)
        .with_aspect(800.0, 600.0)
}

pub fn secret_spec() -> WindowSpec {
    WindowSpec::new(SECRET_TITLE).with_size(360.0, 240.0)
}

pub fn trash_spec() -> WindowSpec {
    WindowSpec::new(TRASH_TITLE).with_size(360.0, 240.0)
}

pub fn about_panel_spec(title: &'static str) -> WindowSpec {
    WindowSpec::new(title).fixed_square()
}

// --- articles and badges -----------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Explicit frontmatter flags; label matching applies on top of these.
    pub featured: bool,
    pub popular: bool,
    /// Publication date as days since the civil epoch (1970-01-01).
    pub published_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badges {
    pub top: bool,
    pub hot: bool,
    pub new: bool,
}

impl Badges {
    pub fn count(self) -> u32 {
        self.top as u32 + self.hot as u32 + self.new as u32
    }

    /// TOP outranks HOT outranks NEW.
    pub fn weight(self) -> u32 {
        (self.top as u32) * 3 + (self.hot as u32) * 2 + (self.new as u32)
    }
}

const TOP_LABELS: [&str; 3] = ["top", "pinned", "featured"];
const HOT_LABELS: [&str; 4] = ["hot", "popular", "trend", "trending"];

fn labels_of(article: &Article) -> impl Iterator<Item = String> + '_ {
    article
        .tags
        .iter()
        .chain(article.categories.iter())
        .map(|s| s.to_lowercase())
        .chain(
            article
                .title
                .to_lowercase()
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>(),
        )
}

fn has_any(article: &Article, needles: &[&str]) -> bool {
    labels_of(article).any(|label| needles.iter().any(|n| label.contains(n)))
}

/// Badge flags for an article, evaluated against `today` (days since the
/// civil epoch). NEW means published at most ten days ago; future-dated
/// posts (negative age) count as new too.
pub fn badges(article: &Article, today_days: i64) -> Badges {
    let top = article.featured || has_any(article, &TOP_LABELS);
    let hot = article.popular || has_any(article, &HOT_LABELS);
    let age = today_days - article.published_days;
    let new = age <= 10;
    Badges { top, hot, new }
}

/// Order articles for the list: badge count desc, then badge weight desc,
/// then date desc.
pub fn sort_articles(articles: &mut [Article], today_days: i64) {
    articles.sort_by(|a, b| {
        let ba = badges(a, today_days);
        let bb = badges(b, today_days);
        bb.count()
            .cmp(&ba.count())
            .then(bb.weight().cmp(&ba.weight()))
            .then(b.published_days.cmp(&a.published_days))
    });
}

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u64;
    let m = month as u64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as u64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe as i64 - 719468
}

/// Today as days since the civil epoch.
pub fn today_days() -> i64 {
    match std::time::SystemTime::UNIX_EPOCH.elapsed() {
        Ok(elapsed) => (elapsed.as_secs() / 86_400) as i64,
        Err(_) => 0, // clock before 1970; badge NEW just won't fire
    }
}

/// Seed articles for the list window.
pub fn sample_articles() -> Vec<Article> {
    let mut articles = vec![
        Article {
            title: "Getting Started".into(),
            tags: vec!["guide".into()],
            categories: vec![],
            featured: true,
            popular: false,
            published_days: days_from_civil(2025, 11, 2),
        },
        Article {
            title: "Hot Takes on Layout".into(),
            tags: vec!["hot".into()],
            categories: vec!["design".into()],
            featured: false,
            popular: false,
            published_days: days_from_civil(2026, 3, 14),
        },
        Article {
            title: "Desk Notes".into(),
            tags: vec![],
            categories: vec!["journal".into()],
            featured: false,
            popular: false,
            published_days: today_days() - 3,
        },
    ];
    sort_articles(&mut articles, today_days());
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, tags: &[&str], published_days: i64) -> Article {
        Article {
            title: title.into(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            categories: vec![],
            featured: false,
            popular: false,
            published_days,
        }
    }

    #[test]
    fn test_days_from_civil_known_dates() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(2000, 3, 1), 11017);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
    }

    #[test]
    fn test_new_badge_window_is_ten_days() {
        let today = days_from_civil(2026, 8, 23);
        assert!(badges(&article("a", &[], today), today).new);
        assert!(badges(&article("a", &[], today - 10), today).new);
        assert!(!badges(&article("a", &[], today - 11), today).new);
        // Future-dated drafts count as new.
        assert!(badges(&article("a", &[], today + 5), today).new);
    }

    #[test]
    fn test_labels_match_tags_categories_and_title() {
        let today = 20_000;
        let by_tag = article("plain", &["pinned"], 0);
        assert!(badges(&by_tag, today).top);

        let mut by_cat = article("plain", &[], 0);
        by_cat.categories.push("Trending Now".into());
        assert!(badges(&by_cat, today).hot);

        let by_title = article("My Featured Post", &[], 0);
        assert!(badges(&by_title, today).top);

        let mut by_flag = article("plain", &[], 0);
        by_flag.popular = true;
        assert!(badges(&by_flag, today).hot);
    }

    #[test]
    fn test_sort_count_then_weight_then_date() {
        let today = days_from_civil(2026, 8, 23);
        let mut articles = vec![
            article("old plain", &[], today - 400),
            article("hot only", &["hot"], today - 100),
            article("top only", &["top"], today - 100),
            // NEW + HOT: two badges, beats any single badge.
            article("fresh and hot", &["hot"], today - 2),
            article("newer plain", &[], today - 200),
        ];
        sort_articles(&mut articles, today);
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "fresh and hot", // count 2
                "top only",      // count 1, weight 3
                "hot only",      // count 1, weight 2
                "newer plain",   // count 0, newer date
                "old plain",
            ]
        );
    }
}
