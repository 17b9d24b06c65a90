use shared::PartyField;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::HtmlInputElement;
use yew::{prelude::*, virtual_dom::AttrValue};

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct FieldProps {
    pub label: AttrValue,
    pub field: PartyField,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    pub value: AttrValue,
    /// Only passed when the field is both touched and invalid.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    pub oninput: Callback<(PartyField, String)>,
    pub onblur: Callback<PartyField>,
}

pub enum Msg {
    Input(InputEvent),
    Blur,
}

pub struct Field;
impl Component for Field {
    type Message = Msg;
    type Properties = FieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(e) => {
                let target: HtmlInputElement = e.target_dyn_into().unwrap_throw();
                ctx.props().oninput.emit((ctx.props().field, target.value()));
                false
            }
            Msg::Blur => {
                ctx.props().onblur.emit(ctx.props().field);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props().clone();
        let name = props.field.name();
        let error_id = format!("{name}-error");

        html! {
            <div class="field">
                <label class="label" for={name}>
                    {props.label}
                </label>
                <input
                    id={name}
                    name={name}
                    class={classes!("input", props.error.is_some().then_some("input-error"))}
                    type={props.kind}
                    value={props.value}
                    placeholder={props.placeholder}
                    autocomplete={props.autocomplete}
                    min={props.min}
                    aria-invalid={if props.error.is_some() { "true" } else { "false" }}
                    aria-describedby={props.error.is_some().then(|| error_id.clone())}
                    oninput={ctx.link().callback(Msg::Input)}
                    onblur={ctx.link().callback(|_: FocusEvent| Msg::Blur)} />
                if let Some(error) = props.error {
                    <div class="error" id={error_id}>
                        {error}
                    </div>
                }
            </div>
        }
    }
}
