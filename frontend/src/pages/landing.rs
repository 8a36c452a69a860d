use yew::prelude::*;

use crate::components::card_row::CardRowSection;
use crate::components::side_nav::SideNav;
use crate::content::SiteContent;
use crate::sections::{
    colophon::ColophonSection, hero::HeroSection, principles::PrinciplesSection,
    video::VideoSection, work::WorkSection,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: SiteContent,
}

/// Every section of the pitch, top to bottom. Sections share nothing but
/// the page scroll.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Start at the top on every visit.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let site = &props.site;

    html! {
        <main class="landing">
            <SideNav />
            <div class="grid-bg" aria-hidden="true"></div>
            <div class="landing-sections">
                <HeroSection hero={site.hero.clone()} />
                <CardRowSection row={site.signals.clone()} />
                <WorkSection work={site.work.clone()} />
                <VideoSection video={site.video.clone()} />
                <PrinciplesSection principles={site.principles.clone()} />
                <CardRowSection row={site.revenue.clone()} />
                <ColophonSection colophon={site.colophon.clone()} />
            </div>
        </main>
    }
}
