use crate::date_key::{DateKey, YearMonth};

pub fn render_index(today: DateKey, month: YearMonth) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{MONTH_LABEL}}", &month.label())
        .replace("{{YEAR}}", &month.year().to_string())
        .replace("{{MONTH}}", &month.month0().to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ea;
      --bg-2: #b9dcb0;
      --ink: #25302a;
      --accent: #2f9e5b;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --heat-0: #ebedf0;
      --heat-1: #c6e48b;
      --heat-2: #7bc96f;
      --heat-3: #239a3b;
      --heat-4: #196127;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f1dc 60%, #f4f8f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .add-row {
      display: flex;
      gap: 10px;
    }

    .add-row input {
      flex: 1;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.complete {
      background: rgba(47, 158, 91, 0.12);
      color: var(--accent);
    }

    button.complete.completed {
      background: var(--accent);
      color: white;
    }

    button.delete {
      background: transparent;
      color: var(--danger);
    }

    .habit-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .habit-actions {
      display: flex;
      gap: 6px;
    }

    .empty {
      text-align: center;
      color: #999;
      padding: 20px;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .weekdays,
    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekdays span {
      text-align: center;
      font-size: 0.8rem;
      color: #8b857d;
    }

    .day-cell {
      aspect-ratio: 1;
      border-radius: 8px;
      display: grid;
      place-items: center;
      font-size: 0.85rem;
    }

    .day-cell.blank {
      opacity: 0.3;
    }

    .heat-0 { background: var(--heat-0); }
    .heat-1 { background: var(--heat-1); }
    .heat-2 { background: var(--heat-2); color: white; }
    .heat-3 { background: var(--heat-3); color: white; }
    .heat-4 { background: var(--heat-4); color: white; }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .tooltip {
      position: fixed;
      pointer-events: none;
      background: var(--ink);
      color: white;
      padding: 8px 12px;
      border-radius: 10px;
      font-size: 0.85rem;
      white-space: pre-line;
      opacity: 0;
      transition: opacity 120ms ease;
    }

    .tooltip.show {
      opacity: 1;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Today is <span id="today">{{TODAY}}</span>. Mark habits done and watch the heat map fill in.</p>
    </header>

    <section class="card">
      <h2>Habits</h2>
      <form class="add-row" id="add-form">
        <input id="habit-input" type="text" placeholder="New habit" autocomplete="off" />
        <button type="submit">Add</button>
      </form>
      <div id="habit-list"></div>
    </section>

    <section class="card">
      <div class="month-nav">
        <button type="button" id="prev-month">&larr;</button>
        <h2 id="month-label">{{MONTH_LABEL}}</h2>
        <button type="button" id="next-month">&rarr;</button>
      </div>
      <div class="weekdays">
        <span>Sun</span><span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span>
      </div>
      <div class="calendar" id="calendar"></div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span class="value" id="current-streak">0 days</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span class="value" id="longest-streak">0 days</span>
      </div>
      <div class="stat">
        <span class="label">Total completions</span>
        <span class="value" id="total-completions">0</span>
      </div>
      <div class="stat">
        <span class="label">Completion rate</span>
        <span class="value" id="completion-rate">0%</span>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>
  <div class="tooltip" id="tooltip"></div>

  <script>
    const view = { year: {{YEAR}}, month: {{MONTH}} };
    const habitInput = document.getElementById('habit-input');
    const habitListEl = document.getElementById('habit-list');
    const calendarEl = document.getElementById('calendar');
    const monthLabelEl = document.getElementById('month-label');
    const tooltipEl = document.getElementById('tooltip');
    const statusEl = document.getElementById('status');
    let grid = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const plural = (n, word) => `${n} ${word}${n === 1 ? '' : 's'}`;

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const postJson = (url, body) => request(url, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const renderHabits = (habits) => {
      habitListEl.innerHTML = '';
      if (!habits.length) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = 'No habits yet. Add one to get started!';
        habitListEl.appendChild(empty);
        return;
      }

      habits.forEach((habit) => {
        const item = document.createElement('div');
        item.className = 'habit-item';

        const name = document.createElement('span');
        name.textContent = habit.name;

        const actions = document.createElement('div');
        actions.className = 'habit-actions';

        const complete = document.createElement('button');
        complete.type = 'button';
        complete.className = habit.completed_today ? 'complete completed' : 'complete';
        complete.textContent = habit.completed_today ? 'Completed' : 'Complete';
        complete.addEventListener('click', () => {
          postJson('/api/toggle', { habit: habit.name })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });

        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'delete';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => {
          if (!confirm(`Delete habit "${habit.name}"?`)) {
            return;
          }
          postJson('/api/habits/delete', { name: habit.name })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });

        actions.appendChild(complete);
        actions.appendChild(remove);
        item.appendChild(name);
        item.appendChild(actions);
        habitListEl.appendChild(item);
      });
    };

    const showTooltip = async (event) => {
      const cell = event.currentTarget;
      try {
        const day = await request(`/api/days/${cell.dataset.date}`);
        let text = `${day.date}\n${plural(day.count, 'completion')}`;
        if (day.habits.length) {
          text += `\n${day.habits.join(', ')}`;
        }
        tooltipEl.textContent = text;
        const rect = cell.getBoundingClientRect();
        tooltipEl.classList.add('show');
        tooltipEl.style.left = `${rect.left + rect.width / 2 - tooltipEl.offsetWidth / 2}px`;
        tooltipEl.style.top = `${rect.top - tooltipEl.offsetHeight - 10}px`;
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const hideTooltip = () => tooltipEl.classList.remove('show');

    const renderCalendar = () => {
      calendarEl.innerHTML = '';
      monthLabelEl.textContent = grid.label;
      for (let i = 0; i < grid.leading_blanks; i += 1) {
        const blank = document.createElement('div');
        blank.className = 'day-cell heat-0 blank';
        calendarEl.appendChild(blank);
      }
      grid.cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = `day-cell heat-${cell.heat_level}`;
        el.textContent = cell.day;
        el.dataset.date = cell.date;
        el.addEventListener('mouseenter', showTooltip);
        el.addEventListener('mouseleave', hideTooltip);
        calendarEl.appendChild(el);
      });
    };

    const renderStats = (stats) => {
      document.getElementById('current-streak').textContent = plural(stats.current_streak, 'day');
      document.getElementById('longest-streak').textContent = plural(stats.longest_streak, 'day');
      document.getElementById('total-completions').textContent = stats.total_completions;
      document.getElementById('completion-rate').textContent = `${stats.completion_rate}%`;
    };

    const loadCalendar = async () => {
      grid = await request(`/api/calendar?year=${view.year}&month=${view.month}`);
      view.year = grid.year;
      view.month = grid.month;
      renderCalendar();
    };

    const refresh = async () => {
      const [habits, stats] = await Promise.all([
        request('/api/habits'),
        request('/api/stats'),
        loadCalendar()
      ]);
      renderHabits(habits);
      renderStats(stats);
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = habitInput.value.trim();
      if (!name) {
        return;
      }
      postJson('/api/habits', { name })
        .then(() => {
          habitInput.value = '';
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      Object.assign(view, grid.prev);
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      Object.assign(view, grid.next);
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_fills_in_date_and_month() {
        let today = DateKey::parse("2024-02-17").unwrap();
        let month = YearMonth::new(2024, 1).unwrap();
        let html = render_index(today, month);
        assert!(html.contains("<span id=\"today\">2024-02-17</span>"));
        assert!(html.contains("February 2024"));
        assert!(html.contains("const view = { year: 2024, month: 1 };"));
        assert!(!html.contains("{{"));
    }
}
