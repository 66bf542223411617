pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>CopyPastePro</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
  body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; min-height: 14rem; font: inherit; }
  pre { white-space: pre-wrap; background: #f4f4f4; padding: 1rem; border-radius: 4px; }
  .row { display: flex; gap: .5rem; margin: .75rem 0; flex-wrap: wrap; }
  .error { color: #b00020; white-space: pre-wrap; }
  details { margin: .75rem 0; }
</style>
</head>
<body>
<h1>CopyPastePro</h1>
<p>Paste your text below. The injected integrity notice is removed before anything else happens.</p>
<textarea id="text" placeholder="Paste here..."></textarea>
<details>
  <summary>Gemini settings</summary>
  <div class="row">
    <input id="model" placeholder="Model (default from config)">
    <input id="api_key" type="password" placeholder="API key (kept for this session)" autocomplete="off">
  </div>
</details>
<div class="row">
  <button id="clean">Clean Only</button>
  <button id="answer">Clean &amp; Generate Answer</button>
</div>
<div id="error" class="error"></div>
<h2 id="cleaned-title" hidden>Cleaned Text</h2>
<pre id="cleaned" hidden></pre>
<h2 id="answer-title" hidden>Answer</h2>
<pre id="answer-out" hidden></pre>
<script>
const $ = (id) => document.getElementById(id);
function show(id, text) {
  $(id).textContent = text;
  $(id).hidden = false;
  $(id + "-title") && ($(id + "-title").hidden = false);
}
async function post(path, body) {
  $("error").textContent = "";
  const res = await fetch(path, {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify(body),
  });
  const data = await res.json();
  if (!res.ok) {
    $("error").textContent = data.help ? data.error + "\n\n" + data.help : data.error;
    return null;
  }
  return data;
}
$("clean").onclick = async () => {
  const data = await post("/api/clean", { text: $("text").value });
  if (data) show("cleaned", data.cleaned);
};
$("answer").onclick = async () => {
  const body = { text: $("text").value };
  if ($("model").value.trim()) body.model = $("model").value.trim();
  if ($("api_key").value.trim()) body.api_key = $("api_key").value.trim();
  $("answer").disabled = true;
  try {
    const data = await post("/api/answer", body);
    if (data) {
      show("cleaned", data.cleaned);
      $("answer-title").hidden = false;
      $("answer-out").textContent = data.answer;
      $("answer-out").hidden = false;
      $("api_key").value = "";
    }
  } finally {
    $("answer").disabled = false;
  }
};
</script>
</body>
</html>
"#;
