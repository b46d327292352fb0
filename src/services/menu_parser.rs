//! Parser del XML del API de menús
//!
//! Formato esperado:
//! `<menuItems><menuItem><text>…</text><value>…</value></menuItem>…</menuItems>`

use serde::Deserialize;

use crate::models::MenuItem;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct MenuItems {
    #[serde(rename = "menuItem", default)]
    items: Vec<RawMenuItem>,
}

#[derive(Debug, Deserialize)]
struct RawMenuItem {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Parsear la respuesta XML en una lista de `MenuItem`
pub fn parse_menu(xml: &str) -> AppResult<Vec<MenuItem>> {
    let menu: MenuItems = quick_xml::de::from_str(xml).map_err(|e| {
        log::error!("❌ XML de menú inválido: {}", e);
        AppError::Parse(format!("Failed to parse vehicle data: {}", e))
    })?;

    let items = menu
        .items
        .into_iter()
        .filter_map(|raw| {
            // Un menuItem sin <text> no aporta nada seleccionable
            let text = raw.text?.trim().to_string();
            Some(MenuItem {
                text,
                value: raw.value.map(|v| v.trim().to_string()),
            })
        })
        .collect::<Vec<_>>();

    log::debug!("📄 {} elementos de menú parseados", items.len());
    Ok(items)
}
