//! countrydb-wasm — WebAssembly bindings for countrydb-core
//!
//! Exposes a [`CountryDirectory`] session to JavaScript. The host page does
//! the fetching (or uses the embedded sample) and hands the JSON body over;
//! favorites live in `localStorage` under `"countryFavorites"`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryDirectory } from 'countrydb-wasm';
//!
//! async function main() {
//!   await init();
//!   const dir = new CountryDirectory();
//!   try {
//!     const body = await fetch('https://restcountries.com/v3.1/all').then(r => r.text());
//!     dir.load_json(body);
//!   } catch (e) {
//!     dir.mark_load_failed(String(e));
//!   }
//!   dir.set_region('Europe');
//!   const snap = dir.snapshot(); // { visible, total_pages, window, regions, ... }
//!   console.log(snap.visible.map(c => c.common_name));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every mutator returns nothing; call `snapshot()` afterwards to render.
//! - Outside a browser (native tests) favorites fall back to memory.
use countrydb_core::loader::parse_countries_str;
use countrydb_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

static SAMPLE_JSON: &str = include_str!("../../countrydb-core/data/countries.sample.json");

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countrydb WASM module...".into());
}

/* --------------------------------------------------------------------------
   Browser storage
-------------------------------------------------------------------------- */

/// `localStorage` when available, memory otherwise (private mode, workers,
/// native builds).
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                return Self::Local(storage);
            }
            web_sys::console::warn_1(&"localStorage unavailable; favorites will not persist".into());
        }
        Self::Memory(MemoryStore::new())
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

fn js_err(e: JsValue) -> CountryDbError {
    CountryDbError::InvalidData(format!("{e:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(s) => s.get_item(key).map_err(js_err),
            Self::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Local(s) => s.set_item(key, value).map_err(js_err),
            Self::Memory(m) => m.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            Self::Local(s) => s.remove_item(key).map_err(js_err),
            Self::Memory(m) => m.remove(key),
        }
    }
}

/* --------------------------------------------------------------------------
   Host-fetched payload
-------------------------------------------------------------------------- */

/// What the host page got back from its request.
enum HostFetch<'a> {
    Body(&'a str),
    Failed(&'a str),
}

impl DataProvider for HostFetch<'_> {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        match self {
            Self::Body(json) => parse_countries_str(json),
            Self::Failed(reason) => Err(CountryDbError::Http((*reason).to_owned())),
        }
    }

    fn fetch_country(&self, code: &str) -> Result<Option<Country>> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .find(|c| c.code.eq_ignore_ascii_case(code)))
    }

    fn fetch_exchange_rate(&self, _currency: &str) -> Result<Option<f64>> {
        Ok(None)
    }
}

/* --------------------------------------------------------------------------
   Directory session
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CountryDirectory {
    inner: Directory<BrowserStore>,
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryDirectory {
    /// One-line load outcome for the browser console. Returns the message so
    /// native callers can inspect it.
    fn log_load(&self, filled: bool) -> Option<String> {
        if !filled {
            return None;
        }
        let message = match self.inner.dataset().status() {
            LoadStatus::Failed(reason) => format!("countrydb: dataset load failed: {reason}"),
            _ => format!("countrydb: loaded {} countries", self.inner.dataset().len()),
        };
        #[cfg(target_arch = "wasm32")]
        {
            if self.inner.dataset().is_failed() {
                web_sys::console::warn_1(&message.as_str().into());
            } else {
                web_sys::console::log_1(&message.as_str().into());
            }
        }
        Some(message)
    }
}

#[wasm_bindgen]
impl CountryDirectory {
    /// New session; favorites are read from storage immediately.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CountryDirectory {
        CountryDirectory {
            inner: Directory::new(BrowserStore::detect()),
        }
    }

    /// Load a REST Countries JSON body. Returns `false` if a dataset was
    /// already loaded; a malformed body counts as a failed load.
    pub fn load_json(&mut self, json: &str) -> bool {
        let filled = self.inner.load(&HostFetch::Body(json));
        self.log_load(filled);
        filled
    }

    /// Record that the host's fetch failed; the session stays empty.
    pub fn mark_load_failed(&mut self, reason: &str) -> bool {
        let filled = self.inner.load(&HostFetch::Failed(reason));
        self.log_load(filled);
        filled
    }

    /// Load the dataset embedded in the module.
    pub fn load_sample(&mut self) -> bool {
        self.load_json(SAMPLE_JSON)
    }

    pub fn set_search_term(&mut self, text: &str) {
        self.inner.set_search_term(text);
    }

    pub fn set_region(&mut self, region: &str) {
        self.inner.set_region(region);
    }

    pub fn set_language(&mut self, language: &str) {
        self.inner.set_language(language);
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        self.inner.set_favorites_only(on);
    }

    pub fn clear_filters(&mut self) {
        self.inner.clear_filters();
    }

    pub fn toggle_favorite(&mut self, code: &str) -> bool {
        self.inner.toggle_favorite(code)
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.inner.is_favorite(code)
    }

    pub fn favorite_count(&self) -> usize {
        self.inner.favorite_count()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.inner.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.inner.next_page();
    }

    pub fn prev_page(&mut self) {
        self.inner.prev_page();
    }

    pub fn current_page(&self) -> usize {
        self.inner.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.inner.total_pages()
    }

    pub fn total_matches(&self) -> usize {
        self.inner.matches().len()
    }

    pub fn load_failed(&self) -> bool {
        self.inner.dataset().is_failed()
    }

    pub fn favorites_persistent(&self) -> bool {
        self.inner.favorites().store().is_persistent()
    }

    pub fn regions(&self) -> js_sys::Array {
        self.inner.regions().iter().map(|r| JsValue::from_str(r)).collect()
    }

    pub fn languages(&self) -> js_sys::Array {
        self.inner.languages().iter().map(|l| JsValue::from_str(l)).collect()
    }

    /// The full render state as a plain JS object.
    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        to_value(&self.inner.snapshot()).map_err(Into::into)
    }

    /// Display-ready detail for `code`, or `null`. `usd_rate` is whatever the
    /// host fetched for the country's first currency.
    pub fn detail(&self, code: &str, usd_rate: Option<f64>) -> std::result::Result<JsValue, JsValue> {
        match self.inner.country(code) {
            Some(c) => to_value(&CountryDetail::new(c, usd_rate)).map_err(Into::into),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn stats(&self) -> std::result::Result<JsValue, JsValue> {
        let stats = json!({
            "countries": self.inner.dataset().len(),
            "regions": self.inner.regions().len(),
            "languages": self.inner.languages().len(),
            "favorites": self.inner.favorite_count(),
        });
        to_value(&stats).map_err(Into::into)
    }
}
