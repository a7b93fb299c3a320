//! Level selection sidebar.

use netsafe_core::Level;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// 1-based number of the highlighted link.
    pub active: Option<u8>,
    pub onselect: Callback<i64>,
}

/// `.sidebar` with one link per level, in level order.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            { for Level::ALL.iter().map(|level| {
                let number = level.number();
                let onclick = {
                    let onselect = props.onselect.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        onselect.emit(i64::from(number));
                    })
                };
                let is_active = props.active == Some(number);
                html! {
                    <a
                        href="#"
                        class={classes!(is_active.then_some("selected"), is_active.then_some("active"))}
                        title={level.title()}
                        {onclick}
                    >
                        { level.label() }
                    </a>
                }
            }) }
        </nav>
    }
}
