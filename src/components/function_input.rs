use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FunctionInputProps {
    /// Source of the active function.
    pub value: String,
    pub error: Option<String>,
    pub on_submit: Callback<String>,
}

#[function_component(FunctionInput)]
pub fn function_input(props: &FunctionInputProps) -> Html {
    // draft survives a rejected submit so the typo can be fixed in place
    let draft = use_state(|| props.value.clone());
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let onkeydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let input: HtmlInputElement = e.target_unchecked_into();
                cb.emit(input.value());
            }
        })
    };
    let border = if props.error.is_some() { "#f85149" } else { "#30363d" };
    html! {<div id="function-input" style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:4px; color:#c9d1d9; font-family:sans-serif;">
        <label style="display:flex; align-items:center; gap:8px;">
            <span>{"f(x) ="}</span>
            <input type="text" spellcheck="false" value={(*draft).clone()} {oninput} {onkeydown}
                style={format!("width:220px; font-family:monospace; border:1px solid {}; border-radius:4px; padding:2px 6px;", border)} />
        </label>
        if let Some(msg) = &props.error {
            <div style="font-size:12px; color:#f85149;">{ msg.clone() }</div>
        }
    </div>}
}
