//! `navigator.geolocation` wrapped in a future.

use common::{facet_selection::ResolvedLocation, geolocation::GeolocationError};
use dioxus::logger::tracing;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, js_sys};

const POSITION_TIMEOUT_MS: u32 = 10_000;
const POSITION_MAX_AGE_MS: u32 = 60_000;

pub const CURRENT_LOCATION_LABEL: &str = "Current location";

pub async fn current_location() -> Result<ResolvedLocation, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(POSITION_TIMEOUT_MS);
    options.set_maximum_age(POSITION_MAX_AGE_MS);

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise).await.map_err(position_error)?;
    let position: web_sys::Position = position.unchecked_into();
    let coords = position.coords();
    tracing::info!("device location resolved (accuracy {} m)", coords.accuracy());
    Ok(ResolvedLocation {
        label: CURRENT_LOCATION_LABEL.to_string(),
        latitude: coords.latitude(),
        longitude: coords.longitude(),
    })
}

fn position_error(value: JsValue) -> GeolocationError {
    let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .unwrap_or(0.0) as u16;
    let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_default();
    let err = GeolocationError::from_code(code, message);
    tracing::warn!("device location failed: {err}");
    err
}
