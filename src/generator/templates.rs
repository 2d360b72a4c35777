//! Base file templates for generated projects
//!
//! One shared template set, parameterized by the registry entry. Every
//! tool gets the same React + Vite + Tailwind shell; only the title,
//! description text, and README metadata differ per tool.

use serde_json::{json, Value};

use crate::registry::ToolSpec;

pub const VITE_CONFIG: &str = "import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
";

pub const TAILWIND_CONFIG: &str = "/** @type {import('tailwindcss').Config} */
export default {
  content: [
    \"./index.html\",
    \"./src/**/*.{js,ts,jsx,tsx}\",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
";

pub const POSTCSS_CONFIG: &str = "export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
";

pub const ENV_EXAMPLE: &str = "# Anthropic Claude API Key
# Get your API key from https://console.anthropic.com/
VITE_ANTHROPIC_API_KEY=your-api-key-here
";

pub const GITIGNORE: &str = "# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store

# Environment variables
.env
.env.local
.env.production
";

pub const NETLIFY_CONFIG: &str = "[[redirects]]
  from = \"/*\"
  to = \"/index.html\"
  status = 200
";

pub const MAIN_JSX: &str = "import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './App.css'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
";

pub const APP_CSS: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;

body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto',
    'Helvetica Neue', sans-serif;
  -webkit-font-smoothing: antialiased;
}
";

/// Project manifest document
pub fn package_json(spec: &ToolSpec) -> Value {
    json!({
        "name": spec.package_name(),
        "version": "1.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "@anthropic-ai/sdk": "^0.20.0",
            "lucide-react": "^0.294.0"
        },
        "devDependencies": {
            "@types/react": "^18.2.43",
            "@types/react-dom": "^18.2.17",
            "@vitejs/plugin-react": "^4.2.1",
            "autoprefixer": "^10.4.16",
            "postcss": "^8.4.32",
            "tailwindcss": "^3.3.6",
            "vite": "^5.0.8"
        }
    })
}

/// Vercel deployment descriptor: rewrite everything to the SPA entry
pub fn vercel_json() -> Value {
    json!({
        "rewrites": [
            {
                "source": "/(.*)",
                "destination": "/index.html"
            }
        ]
    })
}

/// HTML entry point with the tool's display name as the page title
pub fn index_html(spec: &ToolSpec) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#,
        spec.name
    )
}

/// Generated README with setup, deployment, and monetization sections
pub fn readme(spec: &ToolSpec) -> String {
    format!(
        r#"# {name}

{description}

## Setup

1. Copy `.env.example` to `.env`
2. Add your `VITE_ANTHROPIC_API_KEY` to `.env`
3. Install dependencies: `npm install`
4. Run dev server: `npm run dev`
5. Build for production: `npm run build`

## Deployment

### Vercel
```bash
vercel
```

### Netlify
```bash
netlify deploy
```

## Monetization

{monetization}

## License

MIT
"#,
        name = spec.name,
        description = spec.description,
        monetization = spec.monetization,
    )
}

// JSX is brace-dense, so the application shell is substituted with
// placeholder markers instead of a format string.
const APP_JSX_TEMPLATE: &str = r#"import { useState } from 'react'
import { Sparkles, Loader2 } from 'lucide-react'

function App() {
  const [input, setInput] = useState('')
  const [output, setOutput] = useState('')
  const [loading, setLoading] = useState(false)
  const [error, setError] = useState('')

  const apiKey = import.meta.env.VITE_ANTHROPIC_API_KEY

  const handleSubmit = async (e) => {
    e.preventDefault()
    if (!input.trim()) return
    if (!apiKey) {
      setError('Please set VITE_ANTHROPIC_API_KEY in your .env file')
      return
    }

    setLoading(true)
    setError('')
    setOutput('')

    try {
      const response = await fetch('https://api.anthropic.com/v1/messages', {
        method: 'POST',
        headers: {
          'Content-Type': 'application/json',
          'x-api-key': apiKey,
          'anthropic-version': '2023-06-01'
        },
        body: JSON.stringify({
          model: 'claude-3-5-sonnet-20241022',
          max_tokens: 4096,
          messages: [{
            role: 'user',
            content: buildPrompt(input)
          }]
        })
      })

      if (!response.ok) {
        throw new Error(`API error: ${response.statusText}`)
      }

      const data = await response.json()
      setOutput(data.content[0].text)
    } catch (err) {
      setError(err.message || 'An error occurred')
    } finally {
      setLoading(false)
    }
  }

  function buildPrompt(userInput) {
    return `You are __TOOL_NAME__.

__TOOL_DESCRIPTION__

Work through the user's input below and respond with your complete result,
clearly structured with sections.

User input:
${userInput}`
  }

  return (
    <div className="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
      <div className="container mx-auto px-4 py-8 max-w-4xl">
        <div className="text-center mb-8">
          <div className="inline-flex items-center gap-2 mb-4">
            <Sparkles className="w-8 h-8 text-indigo-600" />
            <h1 className="text-4xl font-bold text-gray-900">__TOOL_NAME__</h1>
          </div>
          <p className="text-gray-600">__TOOL_DESCRIPTION__</p>
        </div>

        <div className="bg-white rounded-lg shadow-lg p-6 mb-6">
          <form onSubmit={handleSubmit} className="space-y-4">
            <div>
              <label className="block text-sm font-medium text-gray-700 mb-2">
                Your Input
              </label>
              <textarea
                value={input}
                onChange={e => setInput(e.target.value)}
                placeholder="Paste your text here..."
                className="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent resize-none"
                rows={8}
                disabled={loading}
              />
            </div>

            <button
              type="submit"
              disabled={loading || !input.trim()}
              className="w-full bg-indigo-600 text-white py-3 px-6 rounded-lg font-medium hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2"
            >
              {loading ? (
                <>
                  <Loader2 className="w-5 h-5 animate-spin" />
                  Processing...
                </>
              ) : (
                <>
                  <Sparkles className="w-5 h-5" />
                  Generate
                </>
              )}
            </button>
          </form>

          {error && (
            <div className="mt-4 p-4 bg-red-50 border border-red-200 rounded-lg text-red-700">
              {error}
            </div>
          )}
        </div>

        {output && (
          <div className="bg-white rounded-lg shadow-lg p-6">
            <h2 className="text-2xl font-bold text-gray-900 mb-4">Result</h2>
            <pre className="whitespace-pre-wrap text-gray-700 bg-gray-50 p-4 rounded-lg border">
              {output}
            </pre>
            <div className="mt-4 flex gap-2">
              <button
                onClick={() => navigator.clipboard.writeText(output)}
                className="px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200"
              >
                Copy
              </button>
            </div>
          </div>
        )}
      </div>
    </div>
  )
}

export default App
"#;

/// Application shell with the tool's name and description substituted in
pub fn app_jsx(spec: &ToolSpec) -> String {
    APP_JSX_TEMPLATE
        .replace("__TOOL_NAME__", &spec.name)
        .replace("__TOOL_DESCRIPTION__", &spec.description)
}
