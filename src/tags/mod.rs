//! Tag compilers and the libraries grouping them.
mod builtins;
mod i18n;
mod verbatim;
mod ember;

pub use self::verbatim::{Item, VerbatimBlock};

use crate::library::Library;


/// Tags active in every template.
pub(crate) fn builtins() -> Library {
    let mut library = Library::new();
    library
        .tag("load", builtins::load)
        .tag("comment", builtins::comment)
        .tag("url", builtins::url);
    library
}

pub(crate) fn i18n() -> Library {
    let mut library = Library::new();
    library.tag("trans", i18n::trans);
    library
}

/// Verbatim regions, Handlebars helpers and the script tags.
///
/// There is no `django_ember_js`: it renders an HTML file owned by the
/// host project rather than markup produced here.
pub(crate) fn ember() -> Library {
    let mut library = Library::new();
    library
        .tag("verbatim", verbatim::verbatim)
        .tag("handlebars", verbatim::handlebars)
        .tag("linkto", ember::linkto)
        .tag("ember", ember::ember)
        .tag("jquery_js", ember::jquery_js)
        .tag("handlebars_js", ember::handlebars_js)
        .tag("ember_js", ember::ember_js)
        .tag("ember_data_js", ember::ember_data_js)
        .tag("tastypie_adapter_js", ember::tastypie_adapter_js)
        .tag("ember_full_js", ember::ember_full_js)
        .tag("emberpie_js", ember::emberpie_js);
    library
}
