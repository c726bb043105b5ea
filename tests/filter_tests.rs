//! End-to-end tests for category filtering of the project gallery.

mod fixtures;

use fixtures::two_category_catalog;
use termfolio::content::default_catalog;
use termfolio::models::{Category, CategoryFilter};
use termfolio::tui::portfolio::PortfolioView;

#[test]
fn test_all_selection_is_the_full_catalog_in_order() {
    let catalog = default_catalog();
    let visible = CategoryFilter::All.visible(&catalog);
    assert_eq!(visible.len(), catalog.len());
    for (shown, original) in visible.iter().zip(catalog.iter()) {
        assert_eq!(shown.id, original.id);
    }
}

#[test]
fn test_each_category_selects_exactly_its_projects() {
    let catalog = default_catalog();
    for category in Category::ALL {
        let visible = CategoryFilter::Only(category).visible(&catalog);
        for project in &visible {
            assert_eq!(project.category, category);
        }
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.id.as_str())
            .collect();
        let actual: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(actual, expected, "order preserved for {}", category.label());
    }
}

#[test]
fn test_design_selection_yields_the_one_design_project() {
    let catalog = two_category_catalog();
    let visible = CategoryFilter::Only(Category::Design).visible(&catalog);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "brand-refresh");
}

#[test]
fn test_unmatched_category_yields_empty_and_activates_empty_state() {
    let catalog = two_category_catalog();
    let visible = CategoryFilter::Only(Category::Data).visible(&catalog);
    assert!(visible.is_empty());

    let mut view = PortfolioView::new();
    assert!(!view.empty_state_active(&catalog));
    view.select_filter(CategoryFilter::Only(Category::Data));
    assert!(view.empty_state_active(&catalog));
    assert!(view.selected_project(&catalog).is_none());
}

#[test]
fn test_selection_reset_when_filter_changes() {
    let catalog = two_category_catalog();
    let mut view = PortfolioView::new();
    view.select_filter(CategoryFilter::Only(Category::Development));
    assert_eq!(
        view.selected_project(&catalog).unwrap().id,
        "inventory-service"
    );

    view.select_filter(CategoryFilter::All);
    assert_eq!(view.selected_project(&catalog).unwrap().id, "brand-refresh");
}

#[test]
fn test_filter_options_cover_all_and_every_category() {
    assert_eq!(CategoryFilter::OPTIONS.len(), Category::ALL.len() + 1);
    assert_eq!(CategoryFilter::OPTIONS[0], CategoryFilter::All);
    for category in Category::ALL {
        assert!(CategoryFilter::OPTIONS.contains(&CategoryFilter::Only(category)));
    }
}
