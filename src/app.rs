use gloo::utils::window;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::SearchPage;
use crate::config::ApiConfig;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_state(|| ApiClient::new(ApiConfig::from_window()));

    html! {
        <div style="font-family: sans-serif; padding: 16px;">
            <SearchPage client={(*client).clone()} />
        </div>
    }
}

/// Hands `content` to the browser as a file download.
pub fn download_csv(content: String, filename: &str) -> Result<(), JsValue> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(&content));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&array, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;

    let document = window()
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let a = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    a.set_href(&url);
    a.set_download(filename);
    a.click();
    Url::revoke_object_url(&url)
}
