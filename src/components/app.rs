use super::plot_view::PlotView;
use crate::config::PlotConfig;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // localStorage override is read once per page load
    let config = use_memo((), |_| PlotConfig::load());
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            clog(&format!(
                "function plotter ready (scale {}, min zoom {})",
                config.scale, config.min_zoom
            ));
            || ()
        });
    }
    html! { <PlotView config={config} /> }
}
