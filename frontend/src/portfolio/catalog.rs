use crate::i18n::translations::CategoryLabels;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ar,
    MusicMarketing,
    EventOrganize,
    WebsiteCreation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub src: &'static str,
    pub kind: MediaKind,
}

/// Which part of the catalog the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown portfolio category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ar,
        Category::MusicMarketing,
        Category::EventOrganize,
        Category::WebsiteCreation,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Ar => "AR",
            Category::MusicMarketing => "Music Marketing",
            Category::EventOrganize => "Event Organize",
            Category::WebsiteCreation => "Website Creation",
        }
    }

    pub fn label(self, labels: &CategoryLabels) -> &'static str {
        match self {
            Category::Ar => labels.ar,
            Category::MusicMarketing => labels.music,
            Category::EventOrganize => labels.events,
            Category::WebsiteCreation => labels.web,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the canonical tags and the short ones ("Music", "Events", "Web").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Category::Ar),
            "music marketing" | "music" => Ok(Category::MusicMarketing),
            "event organize" | "events" => Ok(Category::EventOrganize),
            "website creation" | "web" => Ok(Category::WebsiteCreation),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

impl CategoryFilter {
    /// Button order in the filter bar.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }

    pub fn label(self, labels: &CategoryLabels) -> &'static str {
        match self {
            CategoryFilter::All => labels.all,
            CategoryFilter::Only(category) => category.label(labels),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// Stable-ordered subsequence of `items` selected by `by`.
pub fn filter(items: &[PortfolioItem], by: CategoryFilter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| by.matches(item)).collect()
}

const fn item(
    id: &'static str,
    title: &'static str,
    category: Category,
    description: &'static str,
    src: &'static str,
    kind: MediaKind,
) -> PortfolioItem {
    PortfolioItem {
        id,
        title,
        category,
        description,
        src,
        kind,
    }
}

pub static CATALOG: [PortfolioItem; 13] = [
    item("ar-1", "AR Experience 01", Category::Ar, "Immersive AR Brand Activation", "/AR/video_01.mp4", MediaKind::Video),
    item("ar-2", "AR Experience 02", Category::Ar, "Interactive Social Media Filter", "/AR/video_02.mp4", MediaKind::Video),
    item("ar-3", "AR Experience 03", Category::Ar, "Product Visualization", "/AR/video_03.mp4", MediaKind::Video),
    item("ar-4", "AR Experience 04", Category::Ar, "Creative AR Campaign", "/AR/video_04.mp4", MediaKind::Video),
    item("music-1", "Music Campaign 01", Category::MusicMarketing, "Viral Music Video Promotion", "/Music_Marketing/video_01.mp4", MediaKind::Video),
    item("music-2", "Music Campaign 02", Category::MusicMarketing, "Artist Branding Strategy", "/Music_Marketing/video_02.mp4", MediaKind::Video),
    item("music-3", "Music Campaign 03", Category::MusicMarketing, "Album Launch Event", "/Music_Marketing/video_03.mp4", MediaKind::Video),
    item("music-4", "Music Campaign 04", Category::MusicMarketing, "Digital Streaming Campaign", "/Music_Marketing/video_04.mp4", MediaKind::Video),
    item("music-5", "Music Campaign 05", Category::MusicMarketing, "Fan Engagement Activity", "/Music_Marketing/video_05.mp4", MediaKind::Video),
    item("music-6", "Music Campaign 06", Category::MusicMarketing, "Cross-platform Promotion", "/Music_Marketing/video_06.mp4", MediaKind::Video),
    item("music-7", "Music Campaign 07", Category::MusicMarketing, "Integrated Marketing Strategy", "/Music_Marketing/video_07.mp4", MediaKind::Video),
    item("event-1", "Event Job 01", Category::EventOrganize, "Corporate Seminar & Workshop", "/Event_Organize/Job_01/image_01.jpg", MediaKind::Image),
    item("event-2", "Event Job 02", Category::EventOrganize, "Exclusive Product Launch", "/Event_Organize/Job_02/image_01.jpg", MediaKind::Image),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::locale::Locale;
    use crate::i18n::translations::lookup;

    fn ids(items: &[&PortfolioItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.id).collect()
    }

    fn sample() -> Vec<PortfolioItem> {
        vec![
            item("a1", "A1", Category::Ar, "", "/a1.mp4", MediaKind::Video),
            item("e1", "E1", Category::EventOrganize, "", "/e1.jpg", MediaKind::Image),
            item("a2", "A2", Category::Ar, "", "/a2.mp4", MediaKind::Video),
            item("a3", "A3", Category::Ar, "", "/a3.mp4", MediaKind::Video),
            item("e2", "E2", Category::EventOrganize, "", "/e2.jpg", MediaKind::Image),
            item("a4", "A4", Category::Ar, "", "/a4.mp4", MediaKind::Video),
        ]
    }

    #[test]
    fn all_returns_everything_in_order() {
        let catalog = sample();
        let shown = filter(&catalog, CategoryFilter::All);
        assert_eq!(ids(&shown), vec!["a1", "e1", "a2", "a3", "e2", "a4"]);
    }

    #[test]
    fn category_keeps_only_matches_in_order() {
        let catalog = sample();
        let by: CategoryFilter = "AR".parse().unwrap();
        let shown = filter(&catalog, by);
        assert_eq!(ids(&shown), vec!["a1", "a2", "a3", "a4"]);
        assert!(shown.iter().all(|item| item.category == Category::Ar));

        let events = filter(&catalog, "Events".parse().unwrap());
        assert_eq!(ids(&events), vec!["e1", "e2"]);
    }

    #[test]
    fn category_without_items_is_empty() {
        let catalog = sample();
        assert!(filter(&catalog, "Web".parse().unwrap()).is_empty());
        assert!(filter(&[], CategoryFilter::All).is_empty());
    }

    #[test]
    fn shipped_catalog_counts() {
        let count = |c| filter(&CATALOG, CategoryFilter::Only(c)).len();
        assert_eq!(count(Category::Ar), 4);
        assert_eq!(count(Category::MusicMarketing), 7);
        assert_eq!(count(Category::EventOrganize), 2);
        assert_eq!(count(Category::WebsiteCreation), 0);
        assert_eq!(filter(&CATALOG, CategoryFilter::All).len(), CATALOG.len());
    }

    #[test]
    fn shipped_catalog_ids_are_unique() {
        let mut seen: Vec<_> = CATALOG.iter().map(|item| item.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), CATALOG.len());
    }

    #[test]
    fn tags_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Photography".parse::<CategoryFilter>(),
            Err(ParseCategoryError("Photography".to_string()))
        );
    }

    #[test]
    fn options_start_with_all() {
        let options: Vec<_> = CategoryFilter::options().collect();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[4], CategoryFilter::Only(Category::WebsiteCreation));
    }

    #[test]
    fn labels_follow_locale() {
        let en = &lookup(Locale::English).portfolio.categories;
        let th = &lookup(Locale::Thai).portfolio.categories;
        assert_eq!(CategoryFilter::All.label(en), "All");
        assert_eq!(CategoryFilter::All.label(th), "ทั้งหมด");
        assert_eq!(Category::MusicMarketing.label(en), Category::MusicMarketing.tag());
    }
}
