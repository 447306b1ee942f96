pub static STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f8f9fa;
            color: #1a1a1a;
            line-height: 1.6;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            padding: 40px 20px;
        }

        .header {
            text-align: center;
            margin-bottom: 50px;
        }

        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
        }

        .header .date-range {
            font-size: 1.1em;
            color: #666;
            margin-bottom: 20px;
        }

        .header .summary {
            display: inline-flex;
            gap: 30px;
            background: white;
            padding: 20px 40px;
            border-radius: 12px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }

        .header .summary div {
            text-align: center;
        }

        .header .summary .number {
            font-size: 2em;
            font-weight: bold;
            color: #1d9bf0;
        }

        .header .summary .label {
            color: #666;
            font-size: 0.9em;
        }

        .account-card {
            background: white;
            border-radius: 12px;
            padding: 30px;
            margin-bottom: 30px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }

        .account-header {
            display: flex;
            align-items: center;
            margin-bottom: 25px;
            padding-bottom: 15px;
            border-bottom: 2px solid #f0f0f0;
        }

        .account-header h2 {
            font-size: 1.5em;
        }

        .account-header .badge {
            margin-left: auto;
            background: #1d9bf0;
            color: white;
            padding: 6px 16px;
            border-radius: 20px;
            font-size: 0.9em;
            font-weight: 600;
        }

        .tweet {
            padding: 20px 0;
            border-bottom: 1px solid #f0f0f0;
        }

        .tweet:last-child {
            border-bottom: none;
        }

        .tweet-date {
            color: #666;
            font-size: 0.85em;
            margin-bottom: 8px;
        }

        .tweet-text {
            font-size: 1.05em;
            margin-bottom: 12px;
            line-height: 1.7;
            overflow-wrap: anywhere;
        }

        .tweet-meta {
            display: flex;
            gap: 20px;
            color: #666;
            font-size: 0.9em;
            align-items: center;
        }

        .tweet-link {
            margin-left: auto;
            color: #1d9bf0;
            text-decoration: none;
        }

        .tweet-link:hover {
            text-decoration: underline;
        }

        .no-activity {
            text-align: center;
            padding: 60px 20px;
            color: #666;
        }

        .no-activity h2 {
            margin-bottom: 10px;
            color: #999;
        }

        @media (max-width: 600px) {
            .header h1 {
                font-size: 1.8em;
            }

            .header .summary {
                flex-direction: column;
                gap: 15px;
            }

            .account-card {
                padding: 20px;
            }
        }
"#;

pub static NO_ACTIVITY: &str = r#"
        <div class="no-activity">
            <h2>No activity this week</h2>
            <p>None of your portfolio companies posted updates during this period.</p>
        </div>
"#;

pub static FOOTER: &str = r#"
    </div>
</body>
</html>
"#;
