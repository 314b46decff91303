//! Portfolio category filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::content::Project;
use crate::error::UnknownCategory;

/// Category a project can be tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTag {
    Web,
    App,
    Marketing,
    Staffing,
}

impl ProjectTag {
    pub const ALL: [ProjectTag; 4] = [
        ProjectTag::Web,
        ProjectTag::App,
        ProjectTag::Marketing,
        ProjectTag::Staffing,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Marketing => "marketing",
            Self::Staffing => "staffing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::App => "App Development",
            Self::Marketing => "Digital Marketing",
            Self::Staffing => "Staffing Solutions",
        }
    }
}

/// The active portfolio tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(ProjectTag),
}

impl CategoryFilter {
    /// Tab order.
    pub const ALL_FILTERS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Tag(ProjectTag::Web),
        CategoryFilter::Tag(ProjectTag::App),
        CategoryFilter::Tag(ProjectTag::Marketing),
        CategoryFilter::Tag(ProjectTag::Staffing),
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tag(tag) => tag.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Tag(tag) => tag.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        Self::ALL_FILTERS
            .into_iter()
            .find(|filter| filter.slug() == slug)
            .ok_or_else(|| UnknownCategory(slug.to_string()))
    }
}

/// Filtered view of the project list; sized for the shipped catalogue.
pub type ProjectView<'a> = SmallVec<[&'a Project; 6]>;

/// Projects matching `filter`, in source order.
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> ProjectView<'_> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

/// One tab per filter with the number of projects it would show.
pub fn category_tabs(projects: &[Project]) -> Vec<CategoryTab> {
    CategoryFilter::ALL_FILTERS
        .into_iter()
        .map(|filter| CategoryTab {
            filter,
            label: filter.label(),
            count: projects.iter().filter(|project| filter.matches(project)).count(),
        })
        .collect()
}

pub fn featured_projects(projects: &[Project]) -> ProjectView<'_> {
    projects.iter().filter(|project| project.featured).collect()
}

/// Technology badges to show on a card and how many were left out.
pub fn visible_technologies(project: &Project, limit: usize) -> (&[&'static str], usize) {
    let shown = project.technologies.len().min(limit);
    (
        &project.technologies[..shown],
        project.technologies.len() - shown,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortfolioState {
    active: CategoryFilter,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Returns whether the active tab changed.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        if self.active == filter {
            return false;
        }
        log::debug!("Portfolio filter {} -> {}", self.active, filter);
        self.active = filter;
        true
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> ProjectView<'a> {
        filter_projects(projects, self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn ids(view: &ProjectView<'_>) -> Vec<&'static str> {
        view.iter().map(|project| project.id).collect()
    }

    #[test]
    fn all_filter_keeps_every_project_in_order() {
        let view = filter_projects(&PROJECTS, CategoryFilter::All);
        assert_eq!(
            ids(&view),
            PROJECTS.iter().map(|project| project.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn web_filter_includes_multi_tag_projects() {
        let view = filter_projects(&PROJECTS, CategoryFilter::Tag(ProjectTag::Web));
        assert_eq!(
            ids(&view),
            vec![
                "ecommerce-platform",
                "healthcare-portal",
                "food-delivery-app",
                "staffing-management",
            ]
        );
    }

    #[test]
    fn tab_counts_match_filter_sizes() {
        let tabs = category_tabs(&PROJECTS);
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0].label, "All Projects");
        for tab in tabs {
            assert_eq!(tab.count, filter_projects(&PROJECTS, tab.filter).len());
        }
    }

    #[test]
    fn filter_slugs_parse_back() {
        for filter in CategoryFilter::ALL_FILTERS {
            assert_eq!(filter.slug().parse::<CategoryFilter>(), Ok(filter));
        }
        assert_eq!(
            "design".parse::<CategoryFilter>(),
            Err(UnknownCategory("design".to_string()))
        );
    }

    #[test]
    fn selecting_the_active_tab_is_not_a_change() {
        let mut state = PortfolioState::new();
        assert!(!state.select(CategoryFilter::All));
        assert!(state.select(CategoryFilter::Tag(ProjectTag::App)));
        assert_eq!(state.visible(&PROJECTS).len(), 2);
    }

    #[test]
    fn featured_projects_are_the_first_three() {
        assert_eq!(
            ids(&featured_projects(&PROJECTS)),
            vec!["ecommerce-platform", "mobile-fitness-app", "digital-marketing-campaign"]
        );
    }

    #[test]
    fn technology_overflow_is_counted() {
        let (shown, hidden) = visible_technologies(&PROJECTS[0], 3);
        assert_eq!(shown, ["Next.js", "React", "TypeScript"]);
        assert_eq!(hidden, 2);
        let (shown, hidden) = visible_technologies(&PROJECTS[0], 10);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
    }
}
