extern crate ember;
use ember::{Context, Engine, Settings};


fn render(settings: Settings, text: &str) -> String {
    let engine = Engine::new(settings);
    let template = engine.compile(text).unwrap();
    template.render(&Context::new(engine.settings())).unwrap()
}

fn with_debug(debug: bool) -> Settings {
    Settings {
        debug,
        ..Settings::default()
    }
}

fn script(file: &str) -> String {
    format!(r#"{}">"#, script_prefix(file))
}

fn script_prefix(file: &str) -> String {
    format!(r#"<script type="text/javascript" src="/static/js/libs/{}"#, file)
}


#[test]
fn rendering_keeps_handlebars_syntax() {
    let rendered = render(Settings::default(), r#"
        {% load ember %}
        {% handlebars "test-template" %}
            <p>{{name}}</p>
            {{{rawname}}}
        {% endhandlebars %}
        "#);
    assert!(rendered.contains(r#"<script type="text/x-handlebars" data-template-name="test-template">"#));
    assert!(rendered.contains("{{name}}"));
    assert!(rendered.contains("{{{rawname}}}"));
    assert!(rendered.contains("<p>"));
    assert!(rendered.contains("</p>"));
}

#[test]
fn rendering_without_template_id() {
    let rendered = render(Settings::default(), r#"
        {% load ember %}
        {% handlebars %}
            <p>{{name}}</p>
            {{{rawname}}}
            No data-template-name in here.
        {% endhandlebars %}
        "#);
    assert!(rendered.contains(r#"<script type="text/x-handlebars">"#));
    assert!(rendered.contains("{{name}}"));
    assert!(rendered.contains("{{{rawname}}}"));
    assert!(rendered.contains("<p>"));
    assert!(rendered.contains("</p>"));
}

#[test]
fn rendering_with_tags() {
    let rendered = render(Settings::default(), r#"
        {% load i18n ember %}

        {% handlebars "test-template" %}
            {% trans "with translation" %}
            {{name}}
            <p>{{{rawname}}}</p>
            {# works with comments too #}
        {% endhandlebars %}
        "#);
    assert!(rendered.contains(r#"<script type="text/x-handlebars" data-template-name="test-template">"#));
    assert!(rendered.contains("{{name}}"));
    assert!(rendered.contains("{{{rawname}}}"));
    assert!(rendered.contains("with translation"));
    assert!(!rendered.contains("{% trans %}"));
    assert!(!rendered.contains("comments"));
    assert!(rendered.contains("<p>"));
    assert!(rendered.contains("</p>"));
}

#[test]
fn body_sits_between_script_tags() {
    let rendered = render(
        Settings::default(),
        r#"{% load ember %}{% handlebars "test-template" %}<p>{{name}}</p>{% endhandlebars %}"#
    );
    let open = rendered.find(r#"<script type="text/x-handlebars" data-template-name="test-template">"#).unwrap();
    let body = rendered.find("<p>{{name}}</p>").unwrap();
    let close = rendered.find("</script>").unwrap();
    assert!(open < body && body < close);
}

#[test]
fn single_libraries_follow_debug() {
    let libraries = [
        ("handlebars_js", "handlebars"),
        ("ember_js", "ember"),
        ("ember_data_js", "ember-data"),
        ("tastypie_adapter_js", "tastypie_adapter"),
    ];
    for (tag, name) in libraries {
        let text = format!("{{% load ember %}}\n{{% {} %}}\n", tag);
        let unminified = render(with_debug(true), &text);
        assert!(unminified.contains(&script(&format!("{}.js", name))), "{}", unminified);
        let minified = render(with_debug(false), &text);
        assert!(minified.contains(&script(&format!("{}.min.js", name))), "{}", minified);
    }
}

#[test]
fn ember_full_js() {
    let rendered = render(with_debug(true), "{% load ember %}{% ember_full_js %}");
    assert!(rendered.contains(&script_prefix("jquery")));
    assert!(rendered.contains(&script("handlebars.js")));
    assert!(rendered.contains(&script("ember.js")));

    let rendered = render(with_debug(false), "{% load ember %}{% ember_full_js %}");
    assert!(rendered.contains(&script_prefix("jquery")));
    assert!(rendered.contains(&script("handlebars.min.js")));
    assert!(rendered.contains(&script("ember.min.js")));
}

#[test]
fn ember_full_js_without_jquery() {
    let rendered = render(with_debug(true), "{% load ember %}{% ember_full_js jquery=false %}");
    assert!(!rendered.contains(&script_prefix("jquery")));
    assert!(rendered.contains(&script("handlebars.js")));
    assert!(rendered.contains(&script("ember.js")));
}

#[test]
fn emberpie_js() {
    for (debug, suffix) in [(true, ".js"), (false, ".min.js")] {
        let rendered = render(with_debug(debug), "{% load ember %}{% emberpie_js %}");
        assert!(rendered.contains(&script_prefix("jquery")));
        for name in ["handlebars", "ember", "ember-data", "tastypie_adapter"] {
            assert!(rendered.contains(&script(&format!("{}{}", name, suffix))), "{}", rendered);
        }
    }
}

#[test]
fn emberpie_js_without_jquery() {
    let rendered = render(with_debug(true), "{% load ember %}{% emberpie_js jquery=false %}");
    assert!(!rendered.contains(&script_prefix("jquery")));
    for name in ["handlebars", "ember", "ember-data", "tastypie_adapter"] {
        assert!(rendered.contains(&script(&format!("{}.js", name))));
    }
}
