//! File input that hands selected files to a callback as bytes.
//!
//! Reading happens in the browser only; during server rendering the input is
//! inert.

use leptos::prelude::*;

/// A file read from an `<input type="file">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[component]
pub fn FilePicker(
    #[prop(into)] label: String,
    on_pick: Callback<Vec<PickedFile>>,
    #[prop(optional)] multiple: bool,
    #[prop(into, optional)] accept: String,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
            input.set_value("");
            leptos::task::spawn_local(async move {
                let mut picked = Vec::with_capacity(files.len());
                for file in files {
                    match read_file(&file).await {
                        Ok(bytes) => picked.push(PickedFile { name: file.name(), content_type: file.type_(), bytes }),
                        Err(e) => log::warn!("could not read {}: {e:?}", file.name()),
                    }
                }
                if !picked.is_empty() {
                    on_pick.run(picked);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_pick);
        }
    };

    view! {
        <label class="file-picker btn">
            {label}
            <input type="file" class="file-picker__input" multiple=multiple accept=accept on:change=on_change/>
        </label>
    }
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
