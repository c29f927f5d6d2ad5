//! Impact handler — grouped impact statements and follow-up directions.

use axum::{extract::State, response::Html};

use showcase_content::ContentStore;

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

pub async fn impact_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_impact(&state.store))
}

fn impact_group(header: &str, bullets: &[String], bg: &str, border: &str) -> String {
    let cards: String = bullets
        .iter()
        .map(|b| {
            format!(
                r#"<div class="card" style="background: {bg}; border-left: 4px solid {border};">{b}</div>"#
            )
        })
        .collect();
    format!("<h2>{header}</h2>{cards}")
}

pub fn render_impact(store: &ContentStore) -> String {
    let impact = &store.config.impact;

    let groups = [
        impact_group("🔬 Scientific Impact", &impact.scientific, "#f0fdf4", "#86efac"),
        impact_group("🗄️ Resource Impact", &impact.resource, "#eff6ff", "#93c5fd"),
        impact_group(
            "🏭 Translational / Application Impact",
            &impact.translational,
            "#fdf4ff",
            "#d8b4fe",
        ),
    ]
    .join("\n");

    let follow_ups: String = impact
        .follow_ups
        .iter()
        .enumerate()
        .map(|(i, fu)| {
            format!(
                r#"<div class="card card-accent"><strong>→ {}.</strong> {fu}</div>"#,
                i + 1
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Impact — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">Impact</h1>
    </div>

    {groups}

    <hr class="section-divider">

    <h2>What This Enables Next</h2>
    {follow_ups}
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
    )
}
