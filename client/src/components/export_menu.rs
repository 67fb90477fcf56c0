//! Drop-down menu offering the marketplace export formats.

use leptos::prelude::*;

use crate::net::types::ExportFormat;

/// Export button with a format menu. Selecting a format or pressing Escape
/// closes the menu; the button is disabled while an export is running.
#[component]
pub fn ExportMenu(
    on_select: Callback<ExportFormat>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let label = label.unwrap_or("Export");

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            open.set(false);
        }
    };

    view! {
        <div class="export-menu" on:keydown=on_keydown>
            <button
                class="btn export-menu__trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                disabled=move || busy.get()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || if busy.get() { "Exporting..." } else { label }}
            </button>
            <Show when=move || open.get()>
                <div class="export-menu__backdrop" on:click=move |_| open.set(false)></div>
                <ul class="export-menu__list" role="menu">
                    {ExportFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <li role="none">
                                    <button
                                        class="export-menu__item"
                                        role="menuitem"
                                        on:click=move |_| {
                                            open.set(false);
                                            on_select.run(format);
                                        }
                                    >
                                        {format.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
