//! Embedded HTML template for the landing page.

/// Landing page template. `%BUILD_TIME%`, `%ENVIRONMENT%` and `%PORT%` are
/// substituted at request time by [`render_home`].
const HOME: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Jenkins CI/CD Pipeline</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }
        .container {
            background: rgba(255,255,255,0.1);
            padding: 30px;
            border-radius: 10px;
            backdrop-filter: blur(10px);
        }
        h1 { color: #fff; text-align: center; }
        .info { background: rgba(255,255,255,0.2); padding: 15px; border-radius: 5px; margin: 10px 0; }
        .success { color: #4CAF50; font-weight: bold; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🚀 Hello from Jenkins CI/CD Pipeline!</h1>
        <div class="info">
            <p><strong>Status:</strong> <span class="success">Deployment Successful!</span></p>
            <p><strong>Application:</strong> Rust Axum Server</p>
            <p><strong>Build Time:</strong> %BUILD_TIME%</p>
            <p><strong>Environment:</strong> %ENVIRONMENT%</p>
            <p><strong>Port:</strong> %PORT%</p>
        </div>
        <div class="info">
            <h3>🎯 Pipeline Features:</h3>
            <ul>
                <li>✅ Automated Code Checkout</li>
                <li>✅ Docker Image Building</li>
                <li>✅ Automated Testing</li>
                <li>✅ Automated Deployment</li>
                <li>✅ Health Monitoring</li>
            </ul>
        </div>
        <p style="text-align: center; margin-top: 30px;">
            <a href="/health" style="color: #fff; text-decoration: none; background: rgba(255,255,255,0.2); padding: 10px 20px; border-radius: 5px;">Check Health Status</a>
        </p>
    </div>
</body>
</html>
"#;

/// Render the landing page with the current build time, environment label
/// and listen port filled in.
pub fn render_home(build_time: &str, environment: &str, port: u16) -> String {
    HOME.replace("%BUILD_TIME%", build_time)
        .replace("%ENVIRONMENT%", environment)
        .replace("%PORT%", &port.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_home_substitutes_all_tokens() {
        let html = render_home("2026-01-01T00:00:00.000Z", "production", 8080);

        assert!(html.contains("Hello from Jenkins CI/CD Pipeline"));
        assert!(html.contains("2026-01-01T00:00:00.000Z"));
        assert!(html.contains("production"));
        assert!(html.contains("8080"));
        assert!(!html.contains("%BUILD_TIME%"));
        assert!(!html.contains("%ENVIRONMENT%"));
        assert!(!html.contains("%PORT%"));
    }
}
