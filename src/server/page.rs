pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>ResuScan</title>
  <style>
    body { font-family: system-ui, sans-serif; background: #eef3f8; display: flex; min-height: 100vh; align-items: center; justify-content: center; margin: 0; }
    main { background: #fff; border-radius: 16px; box-shadow: 0 4px 20px rgba(0,0,0,.15); padding: 32px; width: 100%; max-width: 560px; text-align: center; }
    textarea, input, button { width: 100%; box-sizing: border-box; margin-bottom: 12px; font-size: 16px; }
    textarea { min-height: 120px; padding: 8px; }
    button { padding: 12px; border: 0; border-radius: 24px; background: #2f6fdb; color: #fff; cursor: pointer; }
    .score { font-size: 56px; font-weight: bold; color: #1d8a4a; margin: 16px 0 4px; }
    .error { color: #c0392b; }
    .muted { color: #666; }
  </style>
</head>
<body>
  <main>
    <h1>ResuScan</h1>
    <form id="scan-form">
      <input type="file" name="resume" accept=".pdf,.docx,.txt" required>
      <textarea name="jobdesc" placeholder="Paste the job description here..."></textarea>
      <button type="submit">Get Resume Score</button>
    </form>
    <div id="result"></div>
  </main>
  <script>
    const form = document.getElementById('scan-form');
    const result = document.getElementById('result');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      result.innerHTML = '<p class="muted">Scanning...</p>';
      const response = await fetch('/scan', { method: 'POST', body: new FormData(form) });
      const body = await response.json();
      if (body.error) {
        result.innerHTML = '';
        const p = document.createElement('p');
        p.className = 'error';
        p.textContent = 'Error: ' + body.error;
        result.appendChild(p);
        return;
      }
      const skills = body.skills.length ? body.skills.join(', ') : 'none detected';
      result.innerHTML =
        `<div class="score">${body.score.toFixed(1)} / 100</div>` +
        `<p class="muted">${body.experience_years} years of experience &middot; skills: ${skills}</p>`;
    });
  </script>
</body>
</html>
"#;
