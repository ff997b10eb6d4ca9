use chrono::{Datelike, NaiveDate};
use compute::format::{DateFormatter, EnUsFormatter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Intl, js_name = getCanonicalLocales, catch)]
    fn get_canonical_locales(locales: &str) -> Result<js_sys::Array, JsValue>;
}

/// Canonical form of a BCP 47 tag, or `None` when the browser rejects it.
pub fn canonical_locale(tag: &str) -> Option<String> {
    match get_canonical_locales(tag) {
        Ok(locales) => locales.get(0).as_string(),
        Err(err) => {
            log::warn!("Ignoring invalid locale {:?}: {:?}", tag, err);
            None
        }
    }
}

/// Short dates through `Date.prototype.toLocaleDateString`.
///
/// The locale must already be canonical, see [`canonical_locale`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntlDateFormatter {
    locale: String,
}

impl IntlDateFormatter {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    fn options() -> Result<js_sys::Object, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"month".into(), &"short".into())?;
        js_sys::Reflect::set(&options, &"day".into(), &"numeric".into())?;
        Ok(options)
    }
}

/// `Date` constructor arguments for `date`, or `None` outside years
/// 100..=9999. JS maps years 0-99 onto 1900-1999.
fn js_date_parts(date: NaiveDate) -> Option<(u32, i32, i32)> {
    let year = u32::try_from(date.year()).ok().filter(|year| (100..=9999).contains(year))?;
    // JS months are zero-based
    Some((year, date.month0() as i32, date.day() as i32))
}

impl DateFormatter for IntlDateFormatter {
    fn short_date(&self, date: NaiveDate) -> String {
        let Some((year, month0, day)) = js_date_parts(date) else {
            return EnUsFormatter.short_date(date);
        };

        let options = match Self::options() {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Falling back to en-US date format: {:?}", err);
                return EnUsFormatter.short_date(date);
            }
        };

        let js_date = js_sys::Date::new_with_year_month_day(year, month0, day);
        let formatted: String = js_date.to_locale_date_string(&self.locale, &options).into();

        if formatted.is_empty() {
            EnUsFormatter.short_date(date)
        } else {
            formatted
        }
    }
}
