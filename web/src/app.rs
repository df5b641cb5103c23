use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{Footer, Navbar};
use crate::views::{
    equipment_rentals::EquipmentRentalsPage, home::HomePage, minnesota::MinnesotaPage,
    not_found::NotFound, private_events::PrivateEventsPage, saint_lucia::SaintLuciaPage,
    weddings::WeddingsPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>
        <Title text="DJ Bigg Slim Events"/>
        <Meta
            name="description"
            content="Wedding and event DJ services in Saint Lucia and Minnesota, with sound and lighting rentals."
        />

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("weddings") view=WeddingsPage/>
                        <Route path=StaticSegment("saint-lucia") view=SaintLuciaPage/>
                        <Route path=StaticSegment("private-events") view=PrivateEventsPage/>
                        <Route path=StaticSegment("minnesota") view=MinnesotaPage/>
                        <Route path=StaticSegment("equipment-rentals") view=EquipmentRentalsPage/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </ConfigProvider>
    }
}
