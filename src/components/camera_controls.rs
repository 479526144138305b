use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

// Forwards a click as a unit callback.
fn relay(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button title="Zoom out" aria-label="Zoom out" onclick={relay(&props.on_zoom_out)}> {"-"} </button>
        <button title="Zoom in" aria-label="Zoom in" onclick={relay(&props.on_zoom_in)}> {"+"} </button>
        <span style="width:8px;"></span>
        <button title="Back to the origin at zoom 1" aria-label="Reset view" onclick={relay(&props.on_reset)}> {"Reset"} </button>
    </div>}
}
