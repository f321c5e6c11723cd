//! Server-rendered HTML for the two screens plus the load-failure state.
//! Markup lives in `format!` templates; all CSV- and user-derived text goes
//! through `v_htmlescape` before it reaches the page.

use v_htmlescape::escape;

use battlecard::comparison::{ComparisonRow, ComparisonView};
use battlecard::profile::{
    CHALLENGES, CLIENT_BASE_SIZES, CURRENT_SOLUTIONS, DECISION_TIMELINES, INDUSTRIES, MSP_SIZES,
    TECH_STACK,
};
use battlecard::roi::{RoiEstimate, GUARDZ_PRICE_PER_ENDPOINT};
use battlecard::{DiscoveryForm, Field};

const STYLE: &str = r#"
    :root { color-scheme: dark; }
    body {
        margin: 0;
        font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
        background: radial-gradient(circle at top, #0f172a, #020617 60%);
        color: #e2e8f0;
    }
    main {
        width: min(880px, 94vw);
        margin: 3rem auto;
        background: rgba(15, 23, 42, 0.85);
        border: 1px solid rgba(148, 163, 184, 0.18);
        border-radius: 18px;
        padding: 2.5rem 2.75rem;
    }
    header h1 { margin: 0; font-size: clamp(1.7rem, 3vw, 2.3rem); font-weight: 600; }
    header p { margin: 0.35rem 0 0; color: #94a3b8; }
    section { margin-top: 2rem; }
    section h2 { font-size: 1.2rem; color: #cbd5f5; }
    .form-group { margin-top: 1.25rem; display: flex; flex-direction: column; gap: 0.5rem; }
    label { font-size: 0.95rem; color: #cbd5f5; }
    select {
        border-radius: 12px;
        border: 1px solid rgba(148, 163, 184, 0.3);
        background: rgba(15, 23, 42, 0.6);
        color: #e2e8f0;
        padding: 0.7rem 0.9rem;
        font-size: 1rem;
    }
    select.invalid { border-color: #f87171; }
    .checkbox-group { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 0.5rem; }
    .checkbox-group label { display: flex; gap: 0.5rem; align-items: center; color: #e2e8f0; }
    .field-error { color: #f87171; font-size: 0.85rem; }
    button, .cta {
        border-radius: 12px;
        border: none;
        padding: 0.85rem 1.6rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        background: linear-gradient(135deg, #38bdf8, #2563eb);
        color: #0f172a;
        text-decoration: none;
        display: inline-block;
    }
    .cta.secondary { background: rgba(148, 163, 184, 0.2); color: #e2e8f0; }
    table { width: 100%; border-collapse: collapse; margin-top: 1.25rem; }
    thead th {
        text-align: left;
        font-size: 0.9rem;
        color: #94a3b8;
        text-transform: uppercase;
        letter-spacing: 0.06em;
        padding: 0.75rem 1rem;
    }
    tbody td { padding: 0.9rem 1rem; border-top: 1px solid rgba(148, 163, 184, 0.12); }
    .guardz-cell { color: #86efac; font-weight: 600; }
    .conditional-row { background: rgba(56, 189, 248, 0.05); }
    .benefits-list li { margin: 0.5rem 0; }
    .roi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; margin-top: 1rem; }
    .roi-card {
        border: 1px solid rgba(148, 163, 184, 0.18);
        border-radius: 12px;
        padding: 1rem 1.2rem;
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
    }
    .roi-card.highlight { border-color: rgba(134, 239, 172, 0.5); }
    .roi-label { font-size: 0.85rem; color: #94a3b8; text-transform: uppercase; letter-spacing: 0.06em; }
    .roi-value { font-size: 1.15rem; font-weight: 600; }
    .roi-value.savings { color: #86efac; }
    .reset-link { display: inline-block; margin-top: 2rem; color: #38bdf8; text-decoration: none; }
    .page-error { color: #f87171; }
"#;

pub fn render_form_page(form: &DiscoveryForm) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Guardz Competitor Intelligence Tool</title>
    <style>{STYLE}</style>
</head>
<body>
<main>
    <header>
        <h1>Guardz Competitor Intelligence Tool</h1>
        <p>Tell us about your MSP to see a personalized comparison</p>
    </header>
    <form method="post" action="/compare">
        <section>
            <h2>Business Profile</h2>
            {current_solution}
            {msp_size}
            {client_base_size}
            {industry_focus}
        </section>
        <section>
            <h2>Technical Profile</h2>
            {tech_stack}
            {biggest_challenge}
            {decision_timeline}
        </section>
        <section>
            <button type="submit">Generate My Comparison</button>
        </section>
    </form>
</main>
</body>
</html>"#,
        current_solution = render_select(
            form,
            Field::CurrentSolution,
            "1. Current Security Solution *",
            "Select your current solution...",
            &CURRENT_SOLUTIONS,
        ),
        msp_size = render_select(
            form,
            Field::MspSize,
            "2. MSP Size *",
            "Select your MSP size...",
            &MSP_SIZES,
        ),
        client_base_size = render_select(
            form,
            Field::ClientBaseSize,
            "3. Client Base Size *",
            "Select your client base size...",
            &CLIENT_BASE_SIZES,
        ),
        industry_focus = render_select(
            form,
            Field::IndustryFocus,
            "4. Primary Industry Focus *",
            "Select your primary industry...",
            &INDUSTRIES,
        ),
        tech_stack = render_tech_checkboxes(form),
        biggest_challenge = render_select(
            form,
            Field::BiggestChallenge,
            "6. Biggest Operational Challenge *",
            "Select your biggest challenge...",
            &CHALLENGES,
        ),
        decision_timeline = render_select(
            form,
            Field::DecisionTimeline,
            "7. Decision Timeline *",
            "Select your timeline...",
            &DECISION_TIMELINES,
        ),
    )
}

fn render_select(
    form: &DiscoveryForm,
    field: Field,
    label: &str,
    placeholder: &str,
    options: &[(&str, &str)],
) -> String {
    let current = form.value(field);
    let options_html: String = options
        .iter()
        .map(|(value, text)| {
            let selected = if *value == current { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{text}</option>"#)
        })
        .collect();

    format!(
        r#"<div class="form-group">
    <label for="{name}">{label}</label>
    <select id="{name}" name="{name}"{invalid}>
        <option value="">{placeholder}</option>
        {options_html}
    </select>
    {error}
</div>"#,
        name = field.name(),
        invalid = if form.error(field).is_some() {
            r#" class="invalid""#
        } else {
            ""
        },
        error = error_line(form, field),
    )
}

fn render_tech_checkboxes(form: &DiscoveryForm) -> String {
    let boxes: String = TECH_STACK
        .iter()
        .map(|tech| {
            let checked = if form.tech_stack().contains(*tech) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label><input type="checkbox" name="tech_stack" value="{tech}"{checked}>{tech}</label>"#
            )
        })
        .collect();

    format!(
        r#"<div class="form-group">
    <label>5. Current Tech Stack (select all that apply) *</label>
    <div class="checkbox-group">{boxes}</div>
    {error}
</div>"#,
        error = error_line(form, Field::TechStack),
    )
}

fn error_line(form: &DiscoveryForm, field: Field) -> String {
    match form.error(field) {
        Some(message) => format!(r#"<span class="field-error">{}</span>"#, escape(message)),
        None => String::new(),
    }
}

pub fn render_comparison_page(view: &ComparisonView) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{headline}</title>
    <style>{STYLE}</style>
</head>
<body>
<main>
    <header>
        <h1>{headline}</h1>
        <p>{subheading}</p>
    </header>
    <section>
        <h2>Side-by-Side Comparison</h2>
        <table>
            <thead>
                <tr><th>Feature</th><th>{competitor}</th><th>Guardz</th></tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    </section>
    <section>
        <h2>Why MSPs Like You Are Switching</h2>
        <ul class="benefits-list">{bullets}</ul>
    </section>
    {roi}
    <section>
        <a href="#" class="cta">Schedule a Demo</a>
        <a href="#" class="cta secondary">Download Full Battle Card</a>
    </section>
    <a href="/" class="reset-link">&larr; Start Over / Try Another Comparison</a>
</main>
</body>
</html>"##,
        headline = escape(&view.headline),
        subheading = escape(&view.subheading),
        competitor = escape(&view.competitor_name),
        rows = render_comparison_rows(&view.rows),
        bullets = render_bullets(&view.why_switch),
        roi = view.roi.as_ref().map(render_roi_section).unwrap_or_default(),
    )
}

fn render_comparison_rows(rows: &[ComparisonRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                r#"<tr{class}><td>{feature}</td><td>{competitor}</td><td class="guardz-cell">{guardz}</td></tr>"#,
                class = if row.conditional {
                    r#" class="conditional-row""#
                } else {
                    ""
                },
                feature = row.feature,
                competitor = escape(&row.competitor),
                guardz = row.guardz,
            )
        })
        .collect()
}

fn render_bullets(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|bullet| format!("<li>{}</li>", escape(bullet)))
        .collect()
}

fn render_roi_section(roi: &RoiEstimate) -> String {
    format!(
        r#"<section>
        <h2>Your Estimated Savings</h2>
        <div class="roi-grid">
            <div class="roi-card">
                <span class="roi-label">Your Current Monthly Cost</span>
                <span class="roi-value">${price:.2} &times; {endpoints} = ${current}</span>
            </div>
            <div class="roi-card">
                <span class="roi-label">With Guardz</span>
                <span class="roi-value">${guardz_price:.2} &times; {endpoints} = ${guardz}</span>
            </div>
            <div class="roi-card highlight">
                <span class="roi-label">Monthly Savings</span>
                <span class="roi-value savings">${monthly}</span>
            </div>
            <div class="roi-card highlight">
                <span class="roi-label">Annual Savings</span>
                <span class="roi-value savings">${annual}</span>
            </div>
        </div>
    </section>"#,
        price = roi.competitor_price,
        endpoints = group_thousands(u64::from(roi.endpoints)),
        current = format_whole_dollars(roi.current_monthly_cost),
        guardz_price = GUARDZ_PRICE_PER_ENDPOINT,
        guardz = format_whole_dollars(roi.guardz_monthly_cost),
        monthly = format_whole_dollars(roi.monthly_savings),
        annual = format_whole_dollars(roi.annual_savings),
    )
}

pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Guardz Competitor Intelligence Tool</title>
    <style>{STYLE}</style>
</head>
<body>
<main>
    <p class="page-error">{message}</p>
    <a href="/" class="reset-link">&larr; Go Back</a>
</main>
</body>
</html>"#,
        message = escape(message),
    )
}

/// Whole-unit display with thousands separators. Non-finite values print
/// as-is, so an unparsable competitor price surfaces as "NaN".
fn format_whole_dollars(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let whole = value.abs().trunc() as u64;
    let grouped = group_thousands(whole);
    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
