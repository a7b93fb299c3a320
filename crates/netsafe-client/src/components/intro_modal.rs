//! Introduction modal shown when exploration starts.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct IntroModalProps {
    pub visible: bool,
    pub onclose: Callback<()>,
}

/// `#modal-container` with the `#close-modal` button.
#[function_component(IntroModal)]
pub fn intro_modal(props: &IntroModalProps) -> Html {
    let on_close_click = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let style = if props.visible {
        "display: flex;"
    } else {
        "display: none;"
    };

    html! {
        <div id="modal-container" class="modal-overlay" {style}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h2>{ "Καλώς ήρθατε!" }</h2>
                    <button id="close-modal" class="modal-close-btn" onclick={on_close_click}>
                        <Icon data={IconData::LUCIDE_X} width="18" height="18" />
                    </button>
                </div>
                <div class="modal-content">
                    <p>
                        { "Κινήστε το ποντίκι για να μετακινήσετε τον εξερευνητή. " }
                        { "Κάντε κλικ στα αντικείμενα κάθε επιπέδου και μάθετε πώς να μένετε ασφαλείς στο διαδίκτυο." }
                    </p>
                </div>
            </div>
        </div>
    }
}
