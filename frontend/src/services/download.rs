use anyhow::{anyhow, Result};
use shared::ExportFile;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Save an export through a temporary object URL and anchor click
pub fn download_file(file: &ExportFile) -> Result<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow!("failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object URL: {:?}", e))?;

    let link = gloo::utils::document()
        .create_element("a")
        .map_err(|e| anyhow!("failed to create link: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    link.set_href(&url);
    link.set_download(&file.file_name);
    link.click();

    Url::revoke_object_url(&url).map_err(|e| anyhow!("failed to revoke object URL: {:?}", e))?;
    Ok(())
}
