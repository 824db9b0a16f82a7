use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"Aion"}</span>
                    <p>{"Crypto credit without selling your crypto."}</p>
                </div>
                <div class="footer-links">
                    <a href="#how-it-works">{"How It Works"}</a>
                    <a href="#features">{"Features"}</a>
                    <a href="#faq">{"FAQ"}</a>
                </div>
            </div>
            <p class="footer-legal">{"© 2025 Aion. All rights reserved."}</p>
        </footer>
    }
}
