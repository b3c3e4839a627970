use axum::response::Html;

/// `GET /` serves the upload page.
pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Caption Studio</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #0f1020;
            color: #e8e8f0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 24px;
        }

        .panel {
            background: #1a1b2e;
            border: 1px solid #2c2e4a;
            border-radius: 16px;
            max-width: 760px;
            width: 100%;
            padding: 36px;
        }

        h1 { font-size: 1.8em; margin-bottom: 6px; }
        .lead { color: #9a9cc0; margin-bottom: 28px; font-size: 0.95em; }

        .dropzone {
            border: 2px dashed #5b5fd6;
            border-radius: 12px;
            padding: 48px 16px;
            text-align: center;
            cursor: pointer;
            transition: background 0.2s, border-color 0.2s;
        }
        .dropzone:hover, .dropzone.active { background: #23254a; border-color: #8c8ff0; }
        .dropzone .hint { color: #7d80a8; font-size: 0.85em; margin-top: 8px; }
        input[type="file"] { display: none; }

        .preview { display: none; margin-top: 24px; }
        .preview img { max-width: 100%; border-radius: 10px; }

        .actions { display: flex; gap: 10px; margin-top: 16px; flex-wrap: wrap; }
        button {
            background: #5b5fd6;
            color: white;
            border: none;
            border-radius: 8px;
            padding: 10px 18px;
            font-weight: 600;
            cursor: pointer;
        }
        button.secondary { background: transparent; border: 1px solid #5b5fd6; color: #c5c7ff; }
        button:disabled { opacity: 0.5; cursor: wait; }

        .spinner {
            display: none;
            width: 36px;
            height: 36px;
            margin: 24px auto;
            border: 4px solid #2c2e4a;
            border-top-color: #8c8ff0;
            border-radius: 50%;
            animation: spin 0.9s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }

        .result { display: none; margin-top: 20px; background: #23254a; border-radius: 10px; padding: 18px; }
        .result p { line-height: 1.6; }
        .meta { display: flex; justify-content: space-between; margin-top: 12px; font-size: 0.85em; color: #9a9cc0; }
        .badge { background: #5b5fd6; color: white; border-radius: 999px; padding: 2px 10px; font-weight: 600; }

        .error {
            display: none;
            margin-top: 20px;
            padding: 14px;
            border-radius: 10px;
            background: #3a1d2a;
            border: 1px solid #7a2f4a;
            color: #ffb3c8;
        }
    </style>
</head>
<body>
    <div class="panel">
        <h1>Caption Studio</h1>
        <p class="lead">Drop an image and get a generated caption.</p>

        <div class="dropzone" id="dropzone">
            <div>Click to choose an image or drag one here</div>
            <div class="hint">JPG, PNG, WebP, GIF. Up to 10MB.</div>
            <input type="file" id="picker" accept="image/*">
        </div>

        <div class="preview" id="preview">
            <img id="previewImage" alt="Selected image">
            <div class="actions">
                <button id="generate">Generate caption</button>
                <button class="secondary" id="another">Choose another</button>
            </div>
        </div>

        <div class="spinner" id="spinner"></div>
        <div class="error" id="error"></div>

        <div class="result" id="result">
            <p id="caption"></p>
            <div class="meta">
                <span>Confidence <span class="badge" id="confidence">--</span></span>
                <span><strong id="elapsed">--</strong> ms</span>
            </div>
            <div class="actions">
                <button class="secondary" id="copy">Copy</button>
                <button class="secondary" id="regenerate">Regenerate</button>
            </div>
        </div>
    </div>

    <script>
        const MAX_BYTES = 10 * 1024 * 1024;
        const $ = (id) => document.getElementById(id);
        let imageData = null;

        function showError(message) {
            $('error').textContent = message;
            $('error').style.display = message ? 'block' : 'none';
        }

        function accept(file) {
            if (!file) return;
            if (file.size > MAX_BYTES) return showError('File size must be less than 10MB');
            if (!file.type.startsWith('image/')) return showError('Please select a valid image file');

            showError('');
            const reader = new FileReader();
            reader.onload = (e) => {
                imageData = e.target.result;
                $('previewImage').src = imageData;
                $('preview').style.display = 'block';
                $('dropzone').style.display = 'none';
                $('result').style.display = 'none';
            };
            reader.readAsDataURL(file);
        }

        async function readBody(response) {
            const text = await response.text();
            try {
                return JSON.parse(text);
            } catch (_) {
                if (response.status === 413) return { error: 'File size must be less than 10MB' };
                return { error: text || `HTTP ${response.status}` };
            }
        }

        async function generate() {
            if (!imageData) return;
            showError('');
            $('spinner').style.display = 'block';
            $('generate').disabled = true;
            $('regenerate').disabled = true;

            try {
                const response = await fetch('/api/caption', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ image: imageData })
                });
                const data = await readBody(response);
                if (!response.ok) throw new Error(data.error || `HTTP ${response.status}`);

                $('caption').textContent = data.caption;
                $('confidence').textContent = Math.round(data.confidence * 100) + '%';
                $('elapsed').textContent = data.processingTime;
                $('result').style.display = 'block';
            } catch (err) {
                $('result').style.display = 'none';
                showError('Failed to generate caption: ' + err.message);
            } finally {
                $('spinner').style.display = 'none';
                $('generate').disabled = false;
                $('regenerate').disabled = false;
            }
        }

        $('dropzone').addEventListener('click', () => $('picker').click());
        $('picker').addEventListener('change', (e) => accept(e.target.files[0]));
        $('dropzone').addEventListener('dragover', (e) => {
            e.preventDefault();
            $('dropzone').classList.add('active');
        });
        $('dropzone').addEventListener('dragleave', () => $('dropzone').classList.remove('active'));
        $('dropzone').addEventListener('drop', (e) => {
            e.preventDefault();
            $('dropzone').classList.remove('active');
            accept(e.dataTransfer.files[0]);
        });
        $('another').addEventListener('click', () => {
            imageData = null;
            $('picker').value = '';
            $('preview').style.display = 'none';
            $('result').style.display = 'none';
            $('dropzone').style.display = 'block';
        });
        $('generate').addEventListener('click', generate);
        $('regenerate').addEventListener('click', generate);
        $('copy').addEventListener('click', async () => {
            try {
                await navigator.clipboard.writeText($('caption').textContent);
                $('copy').textContent = 'Copied';
                setTimeout(() => { $('copy').textContent = 'Copy'; }, 1500);
            } catch (err) {
                showError('Could not copy caption: ' + err.message);
            }
        });
    </script>
</body>
</html>
"#;
