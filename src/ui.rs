use crate::models::{ActivityType, CalendarView, ViewResponse};

pub fn render_index(view: &ViewResponse) -> String {
    let calendar = &view.calendar;
    INDEX_HTML
        .replace("{{TITLE}}", &calendar.title)
        .replace("{{GRID}}", &render_grid(calendar))
        .replace("{{FIXED_LEFT}}", &calendar.remaining.fixed_remaining.to_string())
        .replace("{{CREDITS_LEFT}}", &calendar.remaining.credits_remaining.to_string())
        .replace("{{FIXED_LIMIT}}", &calendar.limits.fixed_class.to_string())
        .replace("{{CREDIT_LIMIT}}", &calendar.limits.credit_class.to_string())
}

/// Server-side copy of the grid so the page is usable before the script runs.
pub fn render_grid(calendar: &CalendarView) -> String {
    let mut html = String::new();
    for _ in 0..calendar.leading_blanks {
        html.push_str(r#"<div class="day-cell empty"></div>"#);
    }
    for cell in &calendar.days {
        html.push_str(&format!(
            r#"<div class="day-cell" data-day="{}"><div class="day-number">{}</div>"#,
            cell.day, cell.day
        ));
        if let (Some(label), Some(activity_type)) = (&cell.label, cell.activity_type) {
            let class = match activity_type {
                ActivityType::FixedClass => "log-fixed",
                ActivityType::CreditClass => "log-credit",
            };
            html.push_str(&format!(r#"<div class="log-entry {class}">{label}</div>"#));
        }
        html.push_str("</div>");
    }
    html
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 20px;
      padding: 18px 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #7a746d;
    }

    .stat .value {
      font-size: 2rem;
      font-weight: 600;
    }

    .stat .limit {
      color: #7a746d;
      font-size: 0.9rem;
    }

    .toolbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .toolbar h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    button.danger {
      background: #c63b2b;
    }

    .weekdays,
    .days {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .weekdays div {
      text-align: center;
      font-size: 0.8rem;
      color: #7a746d;
      text-transform: uppercase;
    }

    .day-cell {
      min-height: 78px;
      background: white;
      border-radius: 14px;
      padding: 8px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      cursor: pointer;
      display: grid;
      align-content: start;
      gap: 6px;
    }

    .day-cell.empty {
      background: transparent;
      border: none;
      cursor: default;
    }

    .day-number {
      font-weight: 600;
    }

    .log-entry {
      font-size: 0.8rem;
      border-radius: 8px;
      padding: 3px 6px;
      color: white;
    }

    .log-fixed {
      background: var(--accent);
    }

    .log-credit {
      background: var(--accent-2);
    }

    .modal-overlay {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.45);
      display: none;
      place-items: center;
      padding: 18px;
    }

    .modal-overlay.open {
      display: grid;
    }

    .modal {
      width: min(420px, 100%);
      background: white;
      border-radius: 24px;
      padding: 24px;
      display: grid;
      gap: 18px;
      box-shadow: var(--shadow);
    }

    .modal-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .modal-header h3 {
      margin: 0;
    }

    .choices {
      display: flex;
      gap: 8px;
    }

    .choices button.selected {
      background: var(--accent);
      color: white;
    }

    .modal input {
      width: 100%;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      font: inherit;
    }

    .modal-actions {
      display: flex;
      justify-content: flex-end;
      gap: 8px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 18px;
      }
      .day-cell {
        min-height: 56px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fitness Calendar</h1>
      <p class="subtitle">Log Pilates classes and ClassPass credits, one entry per day.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Pilates left</span>
        <span id="fixed-left" class="value">{{FIXED_LEFT}}</span>
        <span class="limit">of {{FIXED_LIMIT}} this month</span>
      </div>
      <div class="stat">
        <span class="label">Credits left</span>
        <span id="credits-left" class="value">{{CREDITS_LEFT}}</span>
        <span class="limit">of {{CREDIT_LIMIT}} this month</span>
      </div>
    </section>

    <section class="toolbar">
      <form method="post" action="/calendar/prev">
        <button class="ghost" id="prev-month-btn" type="submit">&larr; Prev</button>
      </form>
      <h2 id="month-year-header">{{TITLE}}</h2>
      <form method="post" action="/calendar/next">
        <button class="ghost" id="next-month-btn" type="submit">Next &rarr;</button>
      </form>
    </section>

    <section>
      <div class="weekdays">
        <div>Sun</div><div>Mon</div><div>Tue</div><div>Wed</div><div>Thu</div><div>Fri</div><div>Sat</div>
      </div>
      <div class="days" id="calendar-days">{{GRID}}</div>
    </section>

    <section class="toolbar">
      <div class="status" id="status"></div>
      <button class="danger" id="reset-month-btn" type="button">Reset month</button>
    </section>
  </main>

  <div class="modal-overlay" id="activity-modal">
    <div class="modal" role="dialog" aria-modal="true">
      <div class="modal-header">
        <h3 id="modal-title"></h3>
        <button class="ghost" id="modal-close-btn" type="button">&times;</button>
      </div>
      <div class="choices">
        <button class="ghost" id="fixed-btn" type="button" data-type="fixed_class">Pilates</button>
        <button class="ghost" id="credit-btn" type="button" data-type="credit_class">ClassPass</button>
      </div>
      <div id="credits-input-group">
        <label for="credit-cost">Credits used</label>
        <input id="credit-cost" type="number" min="0" inputmode="numeric" />
      </div>
      <div class="modal-actions">
        <button class="danger" id="delete-btn" type="button">Delete</button>
        <button id="save-btn" type="button">Save</button>
      </div>
    </div>
  </div>

  <script>
    const statusEl = document.getElementById('status');
    const fixedLeftEl = document.getElementById('fixed-left');
    const creditsLeftEl = document.getElementById('credits-left');
    const headerEl = document.getElementById('month-year-header');
    const daysEl = document.getElementById('calendar-days');
    const overlayEl = document.getElementById('activity-modal');
    const modalTitleEl = document.getElementById('modal-title');
    const fixedBtn = document.getElementById('fixed-btn');
    const creditBtn = document.getElementById('credit-btn');
    const creditsGroupEl = document.getElementById('credits-input-group');
    const costInput = document.getElementById('credit-cost');
    const deleteBtn = document.getElementById('delete-btn');

    let calendar = null;
    let openDateKey = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderCalendar = (view) => {
      calendar = view;
      headerEl.textContent = view.title;
      fixedLeftEl.textContent = view.remaining.fixed_remaining;
      creditsLeftEl.textContent = view.remaining.credits_remaining;

      daysEl.innerHTML = '';
      for (let i = 0; i < view.leading_blanks; i += 1) {
        const blank = document.createElement('div');
        blank.className = 'day-cell empty';
        daysEl.appendChild(blank);
      }
      view.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = 'day-cell';
        cell.dataset.day = day.day;
        const number = document.createElement('div');
        number.className = 'day-number';
        number.textContent = day.day;
        cell.appendChild(number);
        if (day.label) {
          const entry = document.createElement('div');
          entry.className = day.activity_type === 'fixed_class' ? 'log-entry log-fixed' : 'log-entry log-credit';
          entry.textContent = day.label;
          cell.appendChild(entry);
        }
        daysEl.appendChild(cell);
      });
    };

    const renderModal = (modal) => {
      overlayEl.classList.toggle('open', modal.open);
      if (!modal.open) {
        openDateKey = null;
        return;
      }
      if (modal.date_key !== openDateKey) {
        costInput.value = modal.cost_draft;
        openDateKey = modal.date_key;
      }
      modalTitleEl.textContent = modal.title;
      fixedBtn.classList.toggle('selected', modal.activity_type === 'fixed_class');
      creditBtn.classList.toggle('selected', modal.activity_type === 'credit_class');
      creditsGroupEl.style.display = modal.cost_input_visible ? 'block' : 'none';
      deleteBtn.style.display = modal.delete_enabled ? 'block' : 'none';
    };

    const apply = (data) => {
      renderCalendar(data.calendar);
      renderModal(data.modal);
    };

    const call = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const data = await res.json();
      apply(data);
      return data;
    };

    const run = (promise) => promise.catch((err) => setStatus(err.message, 'error'));

    const load = async () => {
      const res = await fetch('/api/calendar');
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      apply(await res.json());
    };

    document.querySelectorAll('.toolbar form').forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const delta = form.action.endsWith('/prev') ? -1 : 1;
        run(call('/api/calendar/navigate', { delta }));
      });
    });

    document.getElementById('reset-month-btn').addEventListener('click', () => {
      if (!calendar) {
        return;
      }
      const monthName = calendar.title.split(' ')[0];
      if (confirm(`Are you sure you want to erase all data for ${monthName}? This cannot be undone.`)) {
        run(call('/api/calendar/reset', { confirmed: true, year: calendar.year, month: calendar.month }));
      }
    });

    daysEl.addEventListener('click', (event) => {
      const cell = event.target.closest('.day-cell:not(.empty)');
      if (cell && calendar) {
        run(call('/api/modal/open', {
          year: calendar.year,
          month: calendar.month,
          day: Number(cell.dataset.day)
        }));
      }
    });

    [fixedBtn, creditBtn].forEach((button) => {
      button.addEventListener('click', () => {
        run(call('/api/modal/select', { activity_type: button.dataset.type }));
      });
    });

    document.getElementById('save-btn').addEventListener('click', () => {
      run(call('/api/modal/save', { cost_draft: costInput.value }));
    });

    deleteBtn.addEventListener('click', () => run(call('/api/modal/delete')));
    document.getElementById('modal-close-btn').addEventListener('click', () => run(call('/api/modal/close')));
    overlayEl.addEventListener('click', (event) => {
      if (event.target === overlayEl) {
        run(call('/api/modal/close'));
      }
    });

    run(load());
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use crate::models::LogEntry;
    use crate::state::Session;
    use crate::store::LogStore;

    #[test]
    fn grid_has_blank_and_day_cells() {
        let mut store = LogStore::new();
        store.upsert("2024-02-11", LogEntry::credit_class(12));
        let session = Session::new(store, YearMonth::new(2024, 2).unwrap());

        let grid = render_grid(&session.render());
        assert_eq!(grid.matches("day-cell empty").count(), 4);
        assert_eq!(grid.matches("data-day=").count(), 29);
        assert!(grid.contains(r#"<div class="log-entry log-credit">12 Credits</div>"#));
    }

    #[test]
    fn index_fills_placeholders() {
        let session = Session::new(LogStore::new(), YearMonth::new(2024, 2).unwrap());
        let page = render_index(&session.view());
        assert!(page.contains("February 2024"));
        assert!(page.contains(r#"<span id="fixed-left" class="value">5</span>"#));
        assert!(page.contains(r#"<span id="credits-left" class="value">50</span>"#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn modal_script_restores_cost_draft_when_opening() {
        let page = render_index(&Session::new(LogStore::new(), YearMonth::new(2024, 2).unwrap()).view());
        let render_modal = page
            .split("const renderModal")
            .nth(1)
            .and_then(|rest| rest.split("const apply").next())
            .expect("renderModal in page script");
        assert!(render_modal.contains("costInput.value = modal.cost_draft;"));
        assert!(render_modal.contains("modal.date_key !== openDateKey"));
    }
}
