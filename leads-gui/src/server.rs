use leads_data::{ImageDelivery, Lead};
use leptos::server;
use leptos::ServerFnError;

pub const DEFAULT_ROSTER: &str = "roster.json";

#[server]
pub async fn load_roster() -> Result<Vec<Lead>, ServerFnError> {
    let path = std::env::var("LEADS_ROSTER").unwrap_or_else(|_| DEFAULT_ROSTER.to_string());
    let roster = read_roster(&path).await?;
    Ok(roster.leads)
}

#[server]
pub async fn load_image_delivery() -> Result<ImageDelivery, ServerFnError> {
    let endpoint = std::env::var("LEADS_IMAGE_ENDPOINT").ok();
    Ok(ImageDelivery::from_endpoint(endpoint))
}

#[cfg(feature = "ssr")]
pub async fn read_roster(path: &str) -> Result<leads_data::Roster, leads_data::RosterError> {
    log::info!("Reading roster from {}", path);
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| leads_data::RosterError::io(path, err))?;
    let roster: leads_data::Roster = contents.parse()?;
    log::info!("Loaded {} leads", roster.leads.len());
    Ok(roster)
}
