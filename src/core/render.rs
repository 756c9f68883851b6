use crate::domain::model::Lead;
use chrono::NaiveDate;

const PAGE_STYLE: &str = r#"  <style>
    :root { font-family: 'Inter', Arial, sans-serif; color: #111827; background: #f9fafb; }
    body { max-width: 900px; margin: 0 auto; padding: 24px; line-height: 1.6; }
    h1, h2, h3 { color: #0f172a; margin-bottom: 8px; }
    .hero { background: linear-gradient(120deg, #e0f2fe, #ecfeff); padding: 32px; border-radius: 16px; margin-bottom: 24px; }
    .tagline { font-size: 1.1rem; margin-bottom: 16px; }
    .cta { display: inline-block; padding: 12px 18px; background: #2563eb; color: #fff; border-radius: 12px; text-decoration: none; font-weight: 600; }
    .cta.secondary { background: #0ea5e9; }
    .pain, .faq { background: #fff; border-radius: 16px; padding: 24px; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.05); margin-bottom: 24px; }
    ul { padding-left: 20px; }
    .faq-item { margin-bottom: 14px; }
    footer { display: flex; justify-content: space-between; align-items: center; background: #f1f5f9; padding: 16px; border-radius: 12px; }
    @media (max-width: 640px) { footer { flex-direction: column; align-items: flex-start; gap: 12px; } }
  </style>"#;

/// Renders the three fixed FAQ entries for a lead.
pub fn render_faq(lead: &Lead) -> String {
    let faqs = [
        (
            format!(
                "Wie kann {} mehr {}-Anfragen in {} gewinnen?",
                lead.business_name,
                lead.service.to_lowercase(),
                lead.city
            ),
            format!(
                "Wir stellen die Stärken von {} heraus, zeigen Referenzen und bauen klare Conversion-Elemente ein, damit Interessenten sofort Kontakt aufnehmen.",
                lead.business_name
            ),
        ),
        (
            format!("Was bedeutet das Angebot \"{}\" konkret?", lead.offer),
            format!(
                "Wir entwickeln eine individuelle Landingpage, die das {} für {} erklärt und Besuchern einen einfachen nächsten Schritt bietet.",
                lead.offer, lead.business_name
            ),
        ),
        (
            "Wie schnell geht die Umsetzung?".to_string(),
            "In der Regel liefern wir innerhalb weniger Tage eine veröffentlichbare Seite und optimieren anschließend anhand echter Daten.".to_string(),
        ),
    ];

    faqs.iter()
        .map(|(question, answer)| {
            format!(
                "    <div class=\"faq-item\">\n      <h3>{}</h3>\n      <p>{}</p>\n    </div>",
                question, answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the complete HTML document for one lead.
///
/// Pure: the generation date and the CTA contact address are parameters, so
/// identical inputs produce identical output. Lead fields are interpolated
/// verbatim into text, attribute and mailto contexts with no HTML escaping;
/// the input CSV is treated as curated content, not untrusted user data.
pub fn render_page(lead: &Lead, contact_email: &str, generated_on: NaiveDate) -> String {
    let title = format!(
        "{} – {} in {}",
        lead.business_name, lead.service, lead.city
    );
    let tagline = format!("{} in {}: {}", lead.service, lead.city, lead.offer);

    let hero = format!(
        r#"  <section class="hero">
    <h1>{title}</h1>
    <p class="tagline">{tagline}</p>
    <a class="cta" href="mailto:{contact}?subject={business}%20Landingpage">Jetzt Beratung sichern</a>
  </section>"#,
        title = title,
        tagline = tagline,
        contact = contact_email,
        business = lead.business_name,
    );

    let pain = format!(
        r#"  <section class="pain">
    <h2>Wir lösen: {pain_point}</h2>
    <p>Viele {service}-Teams in {city} verlieren täglich potenzielle Kunden, weil ihre Website nicht überzeugt. {business} bekommt eine Seite, die Vertrauen aufbaut, Fragen beantwortet und immer auf einen klaren CTA führt.</p>
    <ul>
      <li>Storytelling rund um {business}</li>
      <li>Lokale Beweise aus {city}</li>
      <li>Schlanke Kontaktwege für mehr Abschlüsse</li>
    </ul>
  </section>"#,
        pain_point = lead.pain_point,
        service = lead.service,
        city = lead.city,
        business = lead.business_name,
    );

    let faq = format!(
        "  <section class=\"faq\">\n    <h2>Häufige Fragen</h2>\n{}\n  </section>",
        render_faq(lead)
    );

    let footer = format!(
        r#"  <footer>
    <p>Seite für {business} erstellt am {date}.</p>
    <a class="cta secondary" href="mailto:{contact}?subject={business}%20Projekt">Kostenloses Gespräch anfragen</a>
  </footer>"#,
        business = lead.business_name,
        date = generated_on.format("%d.%m.%Y"),
        contact = contact_email,
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
{style}
</head>
<body>
{hero}
{pain}
{faq}
{footer}
</body>
</html>
"#,
        title = title,
        style = PAGE_STYLE,
        hero = hero,
        pain = pain,
        faq = faq,
        footer = footer,
    )
}
