use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Landing target for the deposit call to action. The deposit flow itself
/// lives outside this app.
#[function_component(Deposit)]
pub fn deposit() -> Html {
    html! {
        <div class="deposit-page">
            <h1>{"Deposit USDC"}</h1>
            <p>{"Connect your wallet to start earning yield on your deposits."}</p>
            <Link<Route> to={Route::Landing} classes="deposit-back">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
