// Single page served at `/`. All state lives in the server; the page renders
// snapshots from the JSON API and hands the preview to MathJax.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>texgen</title>
<style>
  * { box-sizing: border-box; }
  body { margin: 0; font-family: system-ui, sans-serif; background: #f5f6f8; color: #1d2330; }
  header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.25rem; background: #1d2330; color: #fff; }
  header h1 { font-size: 1.1rem; margin: 0; flex: 1; }
  .status { font-size: 0.85rem; padding: 0.2rem 0.6rem; border-radius: 999px; background: #555; }
  .status.connected { background: #1f8a4c; }
  .status.disconnected { background: #b3261e; }
  main { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; padding: 1rem 1.25rem; }
  section { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
  textarea { width: 100%; min-height: 14rem; font: inherit; padding: 0.5rem; }
  pre { white-space: pre-wrap; word-break: break-word; background: #f0f1f4; padding: 0.75rem; min-height: 6rem; margin: 0; }
  .controls { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; align-items: center; }
  button { font: inherit; padding: 0.4rem 0.9rem; cursor: pointer; }
  button:disabled { cursor: not-allowed; opacity: 0.5; }
  #preview { min-height: 6rem; line-height: 1.5; }
  #preview.hidden { display: none; }
  #debug { grid-column: 1 / -1; font-family: ui-monospace, monospace; font-size: 0.8rem; max-height: 12rem; overflow-y: auto; }
  #debug .error { color: #b3261e; }
  .hint { font-size: 0.8rem; color: #667; }
</style>
</head>
<body>
<header>
  <h1>texgen &mdash; describe it, get LaTeX</h1>
  <select id="model" title="Model"></select>
  <button id="recheck" type="button">Recheck</button>
  <span id="status" class="status">Checking&hellip;</span>
</header>
<main>
  <section>
    <h2>Description</h2>
    <textarea id="input" placeholder="Describe the document you want, e.g. an explanation of the chain rule with an example."></textarea>
    <div class="controls">
      <button id="convert" type="button" disabled>Convert</button>
      <button id="sample" type="button">Sample</button>
      <span class="hint">Ctrl+Enter to convert</span>
    </div>
  </section>
  <section>
    <h2>LaTeX</h2>
    <pre id="output"></pre>
    <div class="controls">
      <button id="download" type="button">Download .tex</button>
      <button id="toggle-preview" type="button">Hide preview</button>
    </div>
    <h2>Preview</h2>
    <div id="preview"></div>
  </section>
  <section id="debug"></section>
</main>
<script>
const MATHJAX_URL = 'https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js';
const $ = (id) => document.getElementById(id);
let lastPreview = null;
let mathJaxLoading = null;
let inputTimer = null;
let lastPhase = 'idle';

function loadMathJax() {
  if (window.MathJax && window.MathJax.typesetPromise) {
    return Promise.resolve(window.MathJax);
  }
  if (!mathJaxLoading) {
    window.MathJax = {
      tex: {
        inlineMath: [['$', '$'], ['\\(', '\\)']],
        displayMath: [['$$', '$$'], ['\\[', '\\]']],
        processEscapes: true,
        tags: 'ams'
      },
      startup: { typeset: false }
    };
    mathJaxLoading = new Promise((resolve, reject) => {
      const script = document.createElement('script');
      script.src = MATHJAX_URL;
      script.async = true;
      script.onload = () => window.MathJax.startup.promise.then(() => resolve(window.MathJax), reject);
      script.onerror = () => reject(new Error('failed to load MathJax'));
      document.head.appendChild(script);
    });
  }
  return mathJaxLoading;
}

function typeset(element) {
  loadMathJax()
    .then((mathJax) => mathJax.typesetPromise([element]))
    .catch((err) => console.error('MathJax typeset failed', err));
}

async function api(method, path, body) {
  const init = { method };
  if (body !== undefined) {
    init.headers = { 'Content-Type': 'application/json' };
    init.body = JSON.stringify(body);
  }
  const res = await fetch(path, init);
  const data = await res.json().catch(() => ({}));
  if (!res.ok) {
    throw new Error(data.error || `HTTP ${res.status}`);
  }
  return data;
}

async function refresh() {
  try {
    render(await api('GET', '/api/state'));
  } catch (err) {
    console.error(err);
  }
}

async function act(method, path, body) {
  try {
    render(await api(method, path, body));
  } catch (err) {
    console.error(err);
    await refresh();
  }
}

function render(state) {
  lastPhase = state.phase;
  const status = $('status');
  status.className = 'status ' + state.connection;
  status.textContent = {
    connected: 'Connected',
    disconnected: 'Disconnected',
    unknown: 'Checking…'
  }[state.connection];

  const select = $('model');
  select.replaceChildren(...state.models.map((name) => new Option(name, name, false, name === state.selected_model)));

  const input = $('input');
  if (document.activeElement !== input && input.value !== state.input) {
    input.value = state.input;
  }

  const convert = $('convert');
  // The textarea may be ahead of the server copy while typing.
  convert.disabled = state.connection !== 'connected' || state.phase === 'converting' || !input.value.trim();
  convert.textContent = state.phase === 'converting' ? 'Converting…' : 'Convert';

  $('output').textContent = state.output;

  const preview = $('preview');
  preview.classList.toggle('hidden', !state.preview_visible);
  $('toggle-preview').textContent = state.preview_visible ? 'Hide preview' : 'Show preview';
  if (state.preview !== lastPreview) {
    lastPreview = state.preview;
    preview.innerHTML = state.preview;
    if (state.preview) {
      typeset(preview);
    }
  }

  const debug = $('debug');
  debug.replaceChildren(...state.debug.map((entry) => {
    const line = document.createElement('div');
    line.className = entry.level;
    line.textContent = `[${new Date(entry.at).toLocaleTimeString()}] ${entry.message}`;
    return line;
  }));
  debug.scrollTop = debug.scrollHeight;
}

async function flushInput() {
  clearTimeout(inputTimer);
  await api('PUT', '/api/input', { text: $('input').value });
}

async function convert() {
  if ($('convert').disabled) {
    return;
  }
  lastPhase = 'converting';
  $('convert').disabled = true;
  $('convert').textContent = 'Converting…';
  try {
    await flushInput();
    render(await api('POST', '/api/convert'));
  } catch (err) {
    console.error(err);
    await refresh();
  }
}

async function download() {
  try {
    const res = await fetch('/api/download');
    if (!res.ok) {
      throw new Error(`HTTP ${res.status}`);
    }
    const blob = await res.blob();
    const disposition = res.headers.get('Content-Disposition') || '';
    const match = /filename="([^"]+)"/.exec(disposition);
    const link = document.createElement('a');
    link.href = URL.createObjectURL(blob);
    link.download = match ? match[1] : 'document.tex';
    link.click();
    setTimeout(() => URL.revokeObjectURL(link.href), 1000);
  } catch (err) {
    console.error(err);
  }
  await refresh();
}

$('input').addEventListener('input', () => {
  clearTimeout(inputTimer);
  inputTimer = setTimeout(() => flushInput().then(refresh).catch(console.error), 300);
  const connected = $('status').classList.contains('connected');
  $('convert').disabled = !connected || lastPhase === 'converting' || !$('input').value.trim();
});
$('input').addEventListener('keydown', (event) => {
  if ((event.ctrlKey || event.metaKey) && event.key === 'Enter') {
    event.preventDefault();
    convert();
  }
});
$('convert').addEventListener('click', convert);
$('sample').addEventListener('click', () => act('POST', '/api/sample'));
$('recheck').addEventListener('click', () => act('POST', '/api/check'));
$('toggle-preview').addEventListener('click', () => act('POST', '/api/preview/toggle'));
$('model').addEventListener('change', (event) => act('PUT', '/api/model', { model: event.target.value }));
$('download').addEventListener('click', download);

act('POST', '/api/check');
setInterval(() => act('POST', '/api/check'), 30000);
</script>
</body>
</html>
"##;
