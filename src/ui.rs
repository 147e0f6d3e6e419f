pub fn render_index(year: i32) -> String {
    INDEX_HTML.replace("{{YEAR}}", &year.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker {{YEAR}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f1ea;
      --bg-2: #d9e6d2;
      --ink: #2b2a28;
      --muted: #7a766f;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
      --empty: #ebe8e1;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef3ea 60%, #f7f5ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    h1 {
      font-size: clamp(2rem, 4vw, 2.6rem);
    }

    .entry {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    input, textarea, select, button {
      font: inherit;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      padding: 10px 12px;
    }

    .grades {
      display: flex;
      gap: 6px;
    }

    .grades button {
      flex: 1;
      color: white;
      font-weight: 600;
      cursor: pointer;
      border: 3px solid transparent;
    }

    .grades button.selected {
      border-color: var(--ink);
    }

    .save {
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .year-grid {
      display: grid;
      grid-template-rows: repeat(7, 14px);
      grid-auto-flow: column;
      grid-auto-columns: 14px;
      gap: 3px;
      overflow-x: auto;
      padding-bottom: 6px;
    }

    .cell {
      width: 14px;
      height: 14px;
      border-radius: 3px;
      background: var(--empty);
    }

    .month-strip {
      display: grid;
      grid-template-columns: repeat(31, 1fr);
      gap: 3px;
    }

    .month-strip .cell {
      width: auto;
      height: 28px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .histogram {
      display: flex;
      align-items: flex-end;
      gap: 10px;
      height: 120px;
    }

    .bar {
      flex: 1;
      border-radius: 8px 8px 0 0;
      min-height: 2px;
      position: relative;
    }

    .bar span {
      position: absolute;
      bottom: -22px;
      width: 100%;
      text-align: center;
      font-size: 0.85rem;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status.error {
      color: #b3261e;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker &ndash; {{YEAR}}</h1>
      <p class="status" id="status"></p>
    </header>

    <section class="entry">
      <label>Date
        <input type="date" id="date" min="{{YEAR}}-01-01" max="{{YEAR}}-12-31" />
      </label>
      <label>Mood grade
        <div class="grades" id="grades"></div>
      </label>
      <label>Anxiety <span id="anxiety-value">-</span>
        <input type="range" id="anxiety" min="1" max="5" step="1" value="3" />
      </label>
      <label>Note
        <textarea id="note" rows="2"></textarea>
      </label>
      <button class="save" id="save-note">Save note &amp; anxiety</button>
      <a href="/api/export">Download backup</a>
    </section>

    <section>
      <h2>Year overview</h2>
      <div class="year-grid" id="year-grid"></div>
    </section>

    <section>
      <h2>Month view</h2>
      <label>Month
        <select id="month"></select>
      </label>
      <div class="month-strip" id="month-strip"></div>
    </section>

    <section>
      <h2>Year summary</h2>
      <div class="stats">
        <div class="stat"><span class="label">Overall</span><span class="value" id="classification">-</span></div>
        <div class="stat"><span class="label">Average mood</span><span class="value" id="average">-</span></div>
        <div class="stat"><span class="label">Average anxiety</span><span class="value" id="anxiety-average">-</span></div>
        <div class="stat"><span class="label">Good days (A, A+)</span><span class="value" id="good">0</span></div>
        <div class="stat"><span class="label">Bad days (D, F)</span><span class="value" id="bad">0</span></div>
      </div>
      <div class="histogram" id="histogram"></div>
    </section>
  </main>

  <script>
    const year = {{YEAR}};
    const statusEl = document.getElementById('status');
    const dateInput = document.getElementById('date');
    const noteInput = document.getElementById('note');
    const anxietyInput = document.getElementById('anxiety');
    const anxietyValue = document.getElementById('anxiety-value');
    const monthSelect = document.getElementById('month');
    let scale = [];

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = `status ${tone || ''}`;
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const colorOf = (mood) => {
      const grade = scale.find((entry) => entry.value === mood);
      return grade ? grade.color : '';
    };

    const fmt = (value) => (value === null ? '-' : value.toFixed(2));

    const renderGrades = (selected) => {
      const container = document.getElementById('grades');
      container.innerHTML = '';
      scale.forEach((grade) => {
        const button = document.createElement('button');
        button.textContent = grade.label;
        button.style.background = grade.color;
        button.classList.toggle('selected', grade.value === selected);
        button.addEventListener('click', () => saveField('mood', grade.value));
        container.appendChild(button);
      });
    };

    const loadDay = async () => {
      const day = await request(`/api/days/${dateInput.value}`);
      renderGrades(day.mood);
      noteInput.value = day.note || '';
      anxietyValue.textContent = day.anxiety === null ? '-' : day.anxiety;
      if (day.anxiety !== null) {
        anxietyInput.value = day.anxiety;
      }
    };

    const loadCalendar = async () => {
      const cells = await request('/api/calendar');
      const grid = document.getElementById('year-grid');
      grid.innerHTML = '';
      cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = 'cell';
        el.title = cell.date;
        el.style.gridRow = cell.weekday + 1;
        if (cell.color) {
          el.style.background = cell.color;
        }
        el.addEventListener('click', () => {
          dateInput.value = cell.date;
          loadDay().catch((err) => setStatus(err.message, 'error'));
        });
        grid.appendChild(el);
      });
    };

    const loadMonth = async () => {
      const data = await request(`/api/months/${monthSelect.value}`);
      const strip = document.getElementById('month-strip');
      strip.innerHTML = '';
      const days = new Date(year, Number(monthSelect.value), 0).getDate();
      for (let day = 1; day <= days; day += 1) {
        const el = document.createElement('div');
        el.className = 'cell';
        el.title = String(day);
        const point = data.points.find((entry) => entry.day === day);
        if (point) {
          el.style.background = colorOf(point.mood);
        }
        strip.appendChild(el);
      }
    };

    const loadSummary = async () => {
      const summary = await request('/api/summary');
      document.getElementById('classification').textContent = summary.classification;
      document.getElementById('average').textContent = summary.average_mood === null ? '-' : `${fmt(summary.average_mood)} / 5`;
      document.getElementById('anxiety-average').textContent = fmt(summary.average_anxiety);
      document.getElementById('good').textContent = summary.good_days;
      document.getElementById('bad').textContent = summary.bad_days;

      const histogram = document.getElementById('histogram');
      histogram.innerHTML = '';
      const max = Math.max(1, ...Object.values(summary.distribution));
      scale.forEach((grade) => {
        const count = summary.distribution[grade.value] || 0;
        const bar = document.createElement('div');
        bar.className = 'bar';
        bar.style.background = grade.color;
        bar.style.height = `${(count / max) * 100}%`;
        bar.innerHTML = `<span>${grade.label} (${count})</span>`;
        histogram.appendChild(bar);
      });
    };

    const refresh = async () => {
      await Promise.all([loadDay(), loadCalendar(), loadMonth(), loadSummary()]);
    };

    const saveField = async (field, value) => {
      setStatus('Saving...', 'info');
      try {
        await request(`/api/days/${dateInput.value}`, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ field, value })
        });
        await refresh();
        setStatus('Saved', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('save-note').addEventListener('click', async () => {
      await saveField('note', noteInput.value);
      await saveField('anxiety', Number(anxietyInput.value));
    });

    anxietyInput.addEventListener('input', () => {
      anxietyValue.textContent = anxietyInput.value;
    });
    dateInput.addEventListener('change', () => loadDay().catch((err) => setStatus(err.message, 'error')));
    monthSelect.addEventListener('change', () => loadMonth().catch((err) => setStatus(err.message, 'error')));

    const init = async () => {
      const today = new Date();
      const iso = today.toISOString().slice(0, 10);
      dateInput.value = today.getFullYear() === year ? iso : `${year}-01-01`;
      for (let month = 1; month <= 12; month += 1) {
        const option = document.createElement('option');
        option.value = month;
        option.textContent = new Date(year, month - 1, 1).toLocaleString('en', { month: 'long' });
        monthSelect.appendChild(option);
      }
      monthSelect.value = Number(dateInput.value.slice(5, 7));
      scale = await request('/api/scale');
      await refresh();
    };

    init().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_bound_to_tracked_year() {
        let page = render_index(2026);
        assert!(page.contains("Mood Tracker &ndash; 2026"));
        assert!(page.contains("min=\"2026-01-01\" max=\"2026-12-31\""));
        assert!(!page.contains("{{YEAR}}"));
    }
}
