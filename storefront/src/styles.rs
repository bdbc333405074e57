//! CSS for the landing page.
//!
//! Kept free of `<`, `>` and `&` so it can be emitted as plain text inside
//! `<style>`.

/// Complete stylesheet: dark orange gradient theme, card grids and the hero
/// reveal transition.
pub const LANDING_CSS: &str = r#"
:root {
    --bg-slate: #0f172a;
    --bg-ember: #7c2d12;
    --text-bright: #ffffff;
    --text-soft: #d1d5db;
    --text-dim: #9ca3af;
    --accent: #ea580c;
    --accent-hot: #dc2626;
    --accent-soft: #fb923c;
    --glass: rgba(255, 255, 255, 0.05);
    --glass-border: rgba(255, 255, 255, 0.1);
    --radius: 12px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: var(--text-bright);
}

a { color: inherit; text-decoration: none; }

.page {
    min-height: 100vh;
    background: linear-gradient(135deg, var(--bg-slate), var(--bg-ember), var(--bg-slate));
}

.container { max-width: 1200px; margin: 0 auto; padding: 0 16px; }
.section { padding-top: 80px; padding-bottom: 80px; }
.section-tight { padding-top: 48px; padding-bottom: 48px; }

/* Header */
.site-header { padding-top: 24px; padding-bottom: 24px; }
.nav-bar { display: flex; align-items: center; justify-content: space-between; }
.logo { display: flex; align-items: center; gap: 8px; }
.logo-mark {
    width: 32px; height: 32px; border-radius: 8px;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(90deg, var(--accent), var(--accent-hot));
}
.brand-name { font-size: 20px; font-weight: 700; }
.nav-actions, .nav-group { display: flex; align-items: center; gap: 16px; }
.welcome { color: var(--text-soft); }

/* Buttons */
.btn {
    border: none; cursor: pointer; font: inherit;
    padding: 8px 16px; border-radius: 8px;
    transition: all 0.2s ease;
}
.btn-solid { background: var(--accent); color: var(--text-bright); }
.btn-solid:hover { background: #c2410c; }
.btn-ghost { background: transparent; color: var(--text-soft); }
.btn-ghost:hover { color: var(--text-bright); }
.btn-outline { background: transparent; color: var(--accent-soft); border: 1px solid var(--accent); }
.btn-outline:hover { background: var(--accent); color: var(--text-bright); }
.btn-hero { padding: 12px 32px; font-weight: 600; }
.btn-icon-row { display: inline-flex; align-items: center; gap: 8px; }
.icon-inline { margin-right: 8px; vertical-align: middle; }
.icon-on-accent { color: var(--text-bright); }

/* Hero */
.hero { padding-top: 80px; padding-bottom: 80px; text-align: center; }
.hero-title { font-size: 56px; font-weight: 700; margin: 0 0 24px; }
.highlight {
    background: linear-gradient(90deg, var(--accent-soft), #f87171);
    -webkit-background-clip: text; background-clip: text; color: transparent;
}
.hero-description { font-size: 20px; color: var(--text-soft); max-width: 672px; margin: 0 auto 32px; }
.cta-row { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }

.reveal { transition: opacity 1s ease, transform 1s ease; }
.reveal-initial { opacity: 0; transform: translateY(32px); }
.reveal-mounted { opacity: 1; transform: translateY(0); }

/* Grids and cards */
.grid { display: grid; gap: 24px; }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.grid-6 { grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 32px; }
.section-heading { text-align: center; margin-bottom: 64px; }
.section-title { font-size: 36px; font-weight: 700; margin: 0 0 16px; }
.section-lead { color: var(--text-soft); max-width: 672px; margin: 0 auto; }

.card {
    background: var(--glass);
    border: 1px solid var(--glass-border);
    border-radius: var(--radius);
    padding: 24px;
}
.card-content { padding: 0; }
.card-title { font-size: 20px; font-weight: 600; margin: 0 0 8px; }
.card-text { color: var(--text-dim); margin: 0; }
.stat-card { text-align: center; }
.stat-value { font-size: 24px; font-weight: 700; margin-bottom: 8px; }
.stat-label { color: var(--text-dim); }
.service-card:hover { border-color: rgba(249, 115, 22, 0.5); }
.service-icon { margin-bottom: 16px; }
.icon-lg { width: 32px; height: 32px; }

.tone-orange { color: #f97316; }
.tone-blue { color: #3b82f6; }
.tone-green { color: #22c55e; }
.tone-purple { color: #a855f7; }

/* Bike categories */
.bike-type { text-align: center; }
.bike-tile {
    width: 64px; height: 64px; margin: 0 auto 12px; border-radius: var(--radius);
    display: flex; align-items: center; justify-content: center;
}
.gradient-green { background: linear-gradient(135deg, #4ade80, #16a34a); }
.gradient-blue { background: linear-gradient(135deg, #60a5fa, #2563eb); }
.gradient-amber { background: linear-gradient(135deg, #facc15, #f97316); }
.gradient-purple { background: linear-gradient(135deg, #c084fc, #9333ea); }
.gradient-red { background: linear-gradient(135deg, #f87171, #dc2626); }
.gradient-pink { background: linear-gradient(135deg, #f472b6, #db2777); }
.badge { color: var(--text-soft); font-weight: 500; }

/* Testimonials */
.rating { display: flex; margin-bottom: 16px; }
.rating-star { color: #facc15; fill: currentColor; }
.quote { color: var(--text-soft); margin: 0 0 16px; }
.byline { font-weight: 600; margin: 0; }

/* Contact */
.contact-panel {
    text-align: center; padding: 48px; border-radius: 16px;
    border: 1px solid rgba(249, 115, 22, 0.3);
    background: linear-gradient(90deg, rgba(234, 88, 12, 0.2), rgba(220, 38, 38, 0.2));
}
.contact-details { margin: 32px 0; }
.contact-item { display: flex; align-items: center; justify-content: center; gap: 8px; color: var(--text-soft); }

/* Footer */
.site-footer { padding-top: 32px; padding-bottom: 32px; border-top: 1px solid var(--glass-border); }
.footer-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; }
.footer-copyright { color: var(--text-dim); }
.footer-links { display: flex; gap: 24px; }
.footer-link { color: var(--text-dim); }
.footer-link:hover { color: var(--text-bright); }
"#;
