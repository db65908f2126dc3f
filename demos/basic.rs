//! Basic example demonstrating the Cachet API client.
//!
//! Run with:
//! ```
//! CACHET_API_URL=https://demo.cachethq.io CACHET_API_TOKEN=your-token cargo run --example basic
//! ```

use cachet_api::{
    instance_status, ping, version, CachetClient, Component, ComponentListQuery, Get, Incident,
    IncidentListQuery, List,
};

#[tokio::main]
async fn main() -> cachet_api::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Cachet client...");
    let client = CachetClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Check the instance is reachable
    println!("\n--- Pinging ---");
    println!("Instance says: {}", ping(&client).await?);

    let status = instance_status(&client).await?;
    println!("Status: {} ({})", status.status, status.message);

    let info = version(&client).await?;
    println!(
        "Version: {} (latest: {})",
        info.version,
        if info.on_latest { "yes" } else { "no" }
    );

    // List first page of components
    println!("\n--- Listing Components (first page) ---");
    let components = Component::list_page(&client, &ComponentListQuery::default(), 1, 10).await?;
    println!(
        "Found {} components (total: {})",
        components.len(),
        components.meta.pagination.total
    );

    for component in &components {
        println!("  - {} [{}]", component.name, component.status_name);
    }

    // Get a specific component (using the first one from the list)
    if let Some(first_component) = components.data.first() {
        println!("\n--- Getting Component Details ---");
        let component = Component::get(&client, first_component.id).await?;
        println!("Component: {}", component.name);
        println!("  ID: {}", component.id);
        println!("  Status: {:?}", component.status);
        println!("  Operational: {}", component.is_operational());
        if component.is_grouped() {
            println!("  Group: {}", component.group_id);
        }
    }

    // List recent incidents and walk into their updates
    println!("\n--- Listing Incidents (first page) ---");
    let incidents = Incident::list_page(&client, &IncidentListQuery::default(), 1, 5).await?;
    println!("Found {} incidents", incidents.len());

    for incident in &incidents {
        println!(
            "  - {} [{}]{}",
            incident.name,
            incident.human_status,
            if incident.is_resolved() { "" } else { " (open)" }
        );
    }

    if let Some(first_incident) = incidents.data.first() {
        println!("\n--- Incident Updates ---");
        let updates = first_incident.updates(&client).await?;
        println!("Found {} updates", updates.len());

        for (i, update) in updates.iter().take(5).enumerate() {
            println!("  {}. [{}] {}", i + 1, update.human_status, update.message);
        }
    }

    println!("\nDone!");
    Ok(())
}
