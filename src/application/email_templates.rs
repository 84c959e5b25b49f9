use url::Url;

const BRAND_NAME: &str = "Boosted";
const BRAND_TAGLINE: &str = "Band Booster Software";

pub const WELCOME_SUBJECT: &str = "You're on the Boosted waitlist! 🎉";

const ROADMAP: [&str; 4] = [
    "Smart fundraising campaign management",
    "Seamless online payment processing",
    "Enhanced parent-student communication tools",
    "Automated reporting and analytics",
];

fn origin_label(site_origin: &Url) -> String {
    site_origin
        .host_str()
        .map(|host| host.to_string())
        .unwrap_or_else(|| site_origin.to_string())
}

/// Subject and HTML body of the email sent right after a waitlist signup.
pub fn welcome_email(site_origin: &Url) -> (String, String) {
    let headline = "Welcome to the waitlist! 🎉";
    let lead = "Thank you for your interest in Boosted! We're building something special to help band boosters like you streamline fundraising, manage payments, and improve communication.";

    let items: String = ROADMAP
        .iter()
        .map(|item| format!(r#"<li style="margin-bottom:8px;">{item}</li>"#))
        .collect();

    let body = format!(
        r#"<div style="background:#f3f4f6;padding:20px;border-radius:8px;margin:20px 0;">
        <h3 style="color:#1f2937;font-size:18px;font-weight:600;margin:0 0 15px 0;">What's coming:</h3>
        <ul style="color:#4b5563;margin:0;padding-left:20px;">{items}</ul>
      </div>
      <p style="color:#4b5563;font-size:16px;line-height:1.6;margin:20px 0;">We'll keep you updated on our progress and let you know as soon as we're ready to launch. In the meantime, feel free to reach out if you have any questions or suggestions!</p>
      <p style="text-align:center;color:#6b7280;font-size:14px;margin:30px 0;">Built by band parents, for band parents</p>"#
    );

    let reason = "you signed up for the Boosted waitlist";
    let html = wrap_email(site_origin, headline, lead, &body, reason);
    (WELCOME_SUBJECT.to_string(), html)
}

fn wrap_email(site_origin: &Url, headline: &str, lead: &str, body_html: &str, reason: &str) -> String {
    let origin = origin_label(site_origin);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background:#f8fafc;margin:0;padding:20px;font-family:'Inter',Arial,sans-serif;">
    <div style="max-width:600px;margin:0 auto;">
      <div style="background:linear-gradient(135deg,#3b82f6 0%,#8b5cf6 100%);padding:40px 20px;text-align:center;border-radius:12px 12px 0 0;">
        <h1 style="color:white;font-size:32px;font-weight:bold;margin:0;">{brand}</h1>
        <p style="color:rgba(255,255,255,0.9);font-size:18px;margin:10px 0 0 0;">{tagline}</p>
      </div>
      <div style="background:white;padding:40px 20px;border-radius:0 0 12px 12px;box-shadow:0 4px 6px -1px rgba(0,0,0,0.1);">
        <h2 style="color:#1f2937;font-size:24px;font-weight:600;margin:0 0 20px 0;">{headline}</h2>
        <p style="color:#4b5563;font-size:16px;line-height:1.6;margin:0 0 20px 0;">{lead}</p>
        {body_html}
      </div>
      <div style="text-align:center;margin-top:20px;">
        <p style="color:#9ca3af;font-size:12px;margin:0;">You're receiving this email because {reason}.</p>
        <p style="color:#9ca3af;font-size:12px;margin:4px 0 0;"><a href="{site}" style="color:#9ca3af;">{origin}</a></p>
      </div>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        tagline = BRAND_TAGLINE,
        headline = headline,
        lead = lead,
        body_html = body_html,
        reason = reason,
        site = site_origin,
        origin = origin,
    )
}
