use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config::PlotConfig;
use crate::render::{render_scene, CanvasSurface};
use crate::state::PlotState;
use crate::util::{clog, cwarn};

use super::{camera_controls::CameraControls, function_input::FunctionInput};

type DrawRef = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

fn redraw(draw_ref: &DrawRef) {
    if let Some(f) = &*draw_ref.borrow() {
        f();
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlotViewProps {
    pub config: Rc<PlotConfig>,
}

#[function_component(PlotView)]
pub fn plot_view(props: &PlotViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let state = {
        let config = props.config.clone();
        use_mut_ref(move || PlotState::new(&config))
    };
    let draw_ref: DrawRef = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    // PlotState lives in a RefCell, so a rejected or accepted expression re-renders by hand
    let rerender = use_force_update();

    // Mount: size sync, draw closure, input listeners
    {
        let canvas_ref = canvas_ref.clone();
        let state = state.clone();
        let draw_ref_setup = draw_ref.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let sync_size = {
                let canvas = canvas.clone();
                let state = state.clone();
                move || {
                    let rect = canvas.get_bounding_client_rect();
                    canvas.set_width(rect.width().max(0.0) as u32);
                    canvas.set_height(rect.height().max(0.0) as u32);
                    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
                    clog(&format!("canvas resized to {}x{}", w, h));
                    state.borrow_mut().resize(w, h)
                }
            };
            // Draw closure: the single render entry point
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let state = state.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let result = CanvasSurface::from_canvas(&canvas).and_then(|mut surface| {
                        let st = state.borrow();
                        render_scene(&mut surface, &st.viewport, &st.function, &config)
                    });
                    if let Err(e) = result {
                        cwarn(&format!("render failed: {}", e));
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure);
            if sync_size() {
                redraw(&draw_ref_setup);
            }
            // Wheel zoom around the cursor
            let wheel_cb = {
                let canvas_w = canvas.clone();
                let state = state.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let rect = canvas_w.get_bounding_client_rect();
                    let cx = e.client_x() as f64 - rect.x();
                    let cy = e.client_y() as f64 - rect.y();
                    let dirty = state.borrow_mut().zoom_at(cx, cy, e.delta_y());
                    if dirty {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();
            // Pan: press on the canvas, move/release anywhere in the window
            let mousedown_cb = {
                let state = state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let _ = state
                        .borrow_mut()
                        .begin_pan(e.screen_x() as f64, e.screen_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let mousemove_cb = {
                let state = state.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let dirty = state
                        .borrow_mut()
                        .drag_to(e.screen_x() as f64, e.screen_y() as f64);
                    if dirty {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let mouseup_cb = {
                let state = state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let _ = state.borrow_mut().end_pan();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();
            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            let resize_cb = {
                let sync_size = sync_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if sync_size() {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                *draw_ref_setup.borrow_mut() = None;
            }
        });
    }

    let submit_cb: Callback<String> = {
        let state = state.clone();
        let draw_ref = draw_ref.clone();
        let rerender = rerender.clone();
        Callback::from(move |text: String| {
            let accepted = state.borrow_mut().submit_expression(&text).is_ok();
            if accepted {
                redraw(&draw_ref);
            }
            rerender.force_update();
        })
    };

    // Camera buttons reuse the wheel formula around the canvas centre
    let camera_cb = |apply: fn(&mut PlotState) -> bool| -> Callback<()> {
        let state = state.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |()| {
            let dirty = apply(&mut state.borrow_mut());
            if dirty {
                redraw(&draw_ref);
            }
        })
    };
    let zoom_in_cb = camera_cb(|s| s.zoom_centered(-200.0));
    let zoom_out_cb = camera_cb(|s| s.zoom_centered(200.0));
    let reset_cb = camera_cb(PlotState::reset_view);

    let (source, error) = {
        let st = state.borrow();
        (st.function.source().to_string(), st.error.clone())
    };

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="plot-canvas" style="display:block; width:100%; height:100%; background:#fff;"></canvas>
        <FunctionInput value={source} {error} on_submit={submit_cb} />
        <CameraControls on_zoom_in={zoom_in_cb} on_zoom_out={zoom_out_cb} on_reset={reset_cb} />
    </div> }
}
