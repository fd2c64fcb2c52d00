//! Inline stylesheet and script embedded in rendered pages.

/// Stylesheet for the events listing.
pub const EVENTS_PAGE_CSS: &str = r#"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: #0f172a; color: #e2e8f0; line-height: 1.6;
    }
    .container { max-width: 900px; margin: 0 auto; padding: 20px; }
    header { text-align: center; padding: 40px 0; }
    h1 { font-size: 2.5rem; background: linear-gradient(135deg, #60a5fa, #a78bfa);
         -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
    .subtitle { color: #94a3b8; margin-top: 8px; }
    .result-count { color: #64748b; font-size: 0.85rem; margin-top: 4px; }
    .filters { display: flex; gap: 12px; justify-content: center; margin: 20px 0; flex-wrap: wrap; }
    .filter-btn { padding: 8px 16px; border-radius: 20px; border: 1px solid #334155;
                  background: transparent; color: #94a3b8; cursor: pointer; transition: all 0.2s; }
    .filter-btn:hover, .filter-btn.active { background: #1e293b; border-color: #60a5fa; color: #fff; }
    .events { display: grid; gap: 16px; }
    .event-card { background: #1e293b; border-radius: 12px; padding: 20px;
                  border: 1px solid #334155; transition: transform 0.2s, border-color 0.2s; }
    .event-card:hover { transform: translateY(-2px); border-color: #60a5fa; }
    .event-header { display: flex; justify-content: space-between; align-items: start; gap: 12px; }
    .event-name { font-size: 1.25rem; font-weight: 600; color: #f1f5f9; }
    .event-badges { display: flex; gap: 8px; flex-wrap: wrap; justify-content: flex-end; }
    .event-badge { padding: 4px 10px; border-radius: 12px; font-size: 0.75rem;
                   font-weight: 500; text-transform: uppercase; white-space: nowrap; }
    .event-meta { display: flex; gap: 16px; margin: 12px 0; color: #94a3b8; font-size: 0.9rem; flex-wrap: wrap; }
    .event-meta span { display: flex; align-items: center; gap: 4px; }
    .event-requirements { display: flex; gap: 8px; flex-wrap: wrap; margin: 8px 0; }
    .req-badge { padding: 2px 8px; border-radius: 8px; font-size: 0.75rem; }
    .event-tags { display: flex; gap: 6px; flex-wrap: wrap; margin: 8px 0; }
    .event-tag { color: #60a5fa; font-size: 0.8rem; }
    .event-desc { color: #cbd5e1; margin: 12px 0; }
    .event-footer { display: flex; justify-content: space-between; align-items: center;
                    margin-top: 16px; padding-top: 16px; border-top: 1px solid #334155; }
    .event-fee { font-size: 1.5rem; font-weight: 700; color: #22c55e; }
    .event-spots { color: #94a3b8; }
    .event-actions { display: flex; gap: 8px; }
    .event-link { padding: 8px 16px; background: #334155; color: white; border-radius: 8px;
                  text-decoration: none; font-weight: 500; }
    .event-link.primary { background: #3b82f6; }
    .event-link:hover { background: #2563eb; }
    .empty { text-align: center; padding: 60px; color: #64748b; }
    @media (max-width: 640px) {
      .event-header { flex-direction: column; }
      .event-footer { flex-direction: column; gap: 12px; text-align: center; }
    }
"#;

/// Client-side category filter.
///
/// Clicking a `.filter-btn` makes it the only active button and shows the
/// cards whose `data-category` equals its `data-filter` (all cards for `all`).
pub const FILTER_SCRIPT: &str = r#"
    document.querySelectorAll('.filter-btn').forEach(btn => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('.filter-btn').forEach(b => b.classList.remove('active'));
        btn.classList.add('active');
        const filter = btn.dataset.filter;
        document.querySelectorAll('.event-card').forEach(card => {
          card.style.display = (filter === 'all' || card.dataset.category === filter) ? 'block' : 'none';
        });
      });
    });
"#;

/// Stylesheet for the error page shell.
pub const ERROR_PAGE_CSS: &str = r#"
    body { font-family: system-ui; background: #0f172a; color: #e2e8f0;
           display: flex; align-items: center; justify-content: center; min-height: 100vh; }
    .error { text-align: center; padding: 40px; }
    h1 { color: #f87171; }
"#;
