//! Page layout: sidebar on the left, content and scene on the right.

use yew::prelude::*;

/// Props for the Layout component.
#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Sidebar content.
    pub sidebar: Html,
    /// Main content to render.
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-layout">
            { props.sidebar.clone() }
            <main class="app-main">
                { props.children.clone() }
            </main>
        </div>
    }
}
