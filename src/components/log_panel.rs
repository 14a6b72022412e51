//! Log Panel
//!
//! Collapsible view of the most recent log lines.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    let toggle = move |_: web_sys::MouseEvent| {
        let now_open = !open.get_untracked();
        if now_open {
            refresh();
        }
        set_open.set(now_open);
    };

    view! {
        <section class="log-panel">
            <div class="log-panel-bar">
                <button type="button" class="log-toggle" on:click=toggle>
                    {move || if open.get() { "Hide log" } else { "Show log" }}
                </button>
                <Show when=move || open.get()>
                    <button type="button" class="log-refresh" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
                </Show>
            </div>
            <Show when=move || open.get()>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet.".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </section>
    }
}
