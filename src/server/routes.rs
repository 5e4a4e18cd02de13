// src/server/routes.rs - JSON API handlers
use crate::core::constants::SERVICE_NAME;
use crate::core::version::{changelog_json, get_version_info};
use crate::i18n::{self, Locale};
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
struct LocaleSummary {
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    default: bool,
}

pub async fn health_check() -> ActixResult<HttpResponse> {
    let info = get_version_info();
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": info.version,
        "versionName": info.name,
        "buildDate": info.build_date,
    })))
}

pub async fn version_info() -> ActixResult<HttpResponse> {
    let mut data = serde_json::to_value(get_version_info()).unwrap_or_else(|_| json!({}));
    if let Some(obj) = data.as_object_mut() {
        obj.insert("changelog".into(), changelog_json());
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": data,
    })))
}

pub async fn locales() -> ActixResult<HttpResponse> {
    let list: Vec<LocaleSummary> = Locale::ALL
        .iter()
        .map(|l| LocaleSummary {
            code: l.code(),
            name: l.display_name(),
            flag: l.flag(),
            default: l.is_default(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(list))
}

/// Default-locale table: what a server-side render is produced with.
pub async fn default_translations() -> ActixResult<HttpResponse> {
    Ok(translations_response(Locale::DEFAULT))
}

pub async fn translations(path: web::Path<String>) -> ActixResult<HttpResponse> {
    let code = path.into_inner();
    match code.parse::<Locale>() {
        Ok(locale) => Ok(translations_response(locale)),
        Err(e) => {
            log::debug!("Translation request for unsupported locale '{}'", code);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "error": e.to_string(),
                "available": Locale::available_codes(),
            })))
        }
    }
}

fn translations_response(locale: Locale) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "locale": locale,
        "translations": i18n::table(locale),
    }))
}
