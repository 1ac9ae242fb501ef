use dioxus::prelude::*;
use mailblocks_engine::{Href, cn};

/// Anchor whose target has already been validated as an app route or an allowed external URL.
///
/// Navigation is suppressed: inside the editor a link is just part of the preview.
#[component]
pub fn TypedLink(
    to: Href,
    class: Option<String>,
    style: Option<String>,
    children: Element,
) -> Element {
    let href = to.href();
    let class = cn!(
        "typed-link",
        ("typed-link-external", to.is_external()),
        class
    );
    let style = style.unwrap_or_default();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            style: "{style}",
            onclick: move |evt: MouseEvent| evt.prevent_default(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use mailblocks_engine::Route;

    #[component]
    fn LinkHarness(to: Href, class: Option<String>) -> Element {
        rsx! {
            TypedLink { to, class, "Open" }
        }
    }

    fn render_link(to: Href, class: Option<String>) -> String {
        let mut dom = VirtualDom::new_with_props(LinkHarness, LinkHarnessProps { to, class });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_route_link_renders_route_path() {
        let html = render_link(
            Route::Editor {
                template: "welcome".to_string(),
            }
            .into(),
            None,
        );

        assert!(html.contains(r#"href="/templates/welcome/edit""#));
        assert!(html.contains(r#"class="typed-link""#));
        assert!(html.contains("Open"));
    }

    #[test]
    fn test_external_link_class_is_merged() {
        let to = Href::parse("https://example.com/offer").unwrap();
        let html = render_link(to, Some("px-2 px-4".to_string()));

        assert!(html.contains(r#"href="https://example.com/offer""#));
        assert!(html.contains(r#"class="typed-link typed-link-external px-4""#));
    }
}
