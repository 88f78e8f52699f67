use super::EmailMessage;

pub const WELCOME_SUBJECT: &str = "Welcome to the ELARO Waitlist! 🎉";
pub const HOW_IT_WORKS_URL: &str = "https://myelaro.com/how-it-works.html";

const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="text-align: center; margin-bottom: 30px;">
        <h1 style="color: #1d8cf8; font-size: 32px; margin: 0;">ELARO</h1>
    </div>
    <div style="background: linear-gradient(135deg, #1d8cf8 0%, #1670c7 100%); padding: 30px; border-radius: 12px; text-align: center; margin-bottom: 30px;">
        <h2 style="color: white; margin: 0 0 15px 0; font-size: 28px;">Welcome to the Waitlist! 🎉</h2>
        <p style="color: rgba(255, 255, 255, 0.95); margin: 0; font-size: 16px;">Thank you for joining us on this journey.</p>
    </div>
    <div style="background: #f8f9fa; padding: 25px; border-radius: 8px; margin-bottom: 30px;">
        <p style="margin: 0 0 15px 0; font-size: 16px;">Hi there,</p>
        <p style="margin: 0 0 15px 0; font-size: 16px;">We're thrilled that you've joined the ELARO waitlist! You're now part of an exclusive group that will be the first to know when we launch.</p>
        <p style="margin: 0 0 15px 0; font-size: 16px;">ELARO is designed to help you never forget what you study. With intelligent reminders and spaced repetition, we'll help you stay organized and retain information better.</p>
        <p style="margin: 0; font-size: 16px;">We'll notify you as soon as we're ready to launch. In the meantime, feel free to learn more about <a href="{{how_it_works_url}}" style="color: #1d8cf8; text-decoration: none;">how ELARO works</a>.</p>
    </div>
    <div style="text-align: center; padding-top: 20px; border-top: 1px solid #e2e8f0;">
        <p style="margin: 0; color: #64748b; font-size: 14px;">Best regards,<br>The ELARO Team</p>
    </div>
</body>
</html>
"#;

pub fn build_welcome_email_body() -> String {
  WELCOME_HTML.replace("{{how_it_works_url}}", HOW_IT_WORKS_URL)
}

pub fn welcome_email(recipient: &str) -> EmailMessage {
  EmailMessage::new(
    vec![recipient.to_string()],
    WELCOME_SUBJECT.to_string(),
    build_welcome_email_body(),
  )
}
