//! Options command handler

use crate::domain::preferences::{
    CatalogOption, Language, Mood, Platform, TimeAvailable, WatchingWith,
};

use super::presenter::Presenter;

/// Print every option catalog with its slugs and labels
pub fn handle_options_command(presenter: &Presenter) {
    print_catalog::<Mood>(presenter, "Moods (--mood)");
    print_catalog::<TimeAvailable>(presenter, "Time available (--time)");
    print_catalog::<WatchingWith>(presenter, "Watching with (--with)");
    print_catalog::<Platform>(presenter, "Platforms (--platform, repeatable)");
    print_catalog::<Language>(presenter, "Languages (--language, repeatable)");
}

fn print_catalog<T: CatalogOption>(presenter: &Presenter, title: &str) {
    presenter.heading(title);
    for option in T::all() {
        presenter.catalog_entry(option.as_str(), option.label());
    }
    presenter.output("");
}
