use askama::Template;

/// Email asking a new registrant to verify their address. The embedded URL
/// carries the plaintext verification code.
#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Verify your account - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .button { display: inline-block; padding: 12px 24px; background-color: #007bff; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Verify Your Email Address</h2>

        <p>Hello {{ first_name }},</p>

        <p>Thanks for creating an account. Click the button below to confirm that this address belongs to you.</p>

        <div style="text-align: center;">
            <a href="{{ verify_url }}" class="button">Verify Email</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ verify_url }}</p>

        <p>If you didn't create this account, you can safely ignore this email.</p>

        <div class="footer">
            <p>This email was sent by {{ app_name }}. If you have any questions, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct VerificationCodeTemplate {
    pub app_name: String,
    pub first_name: String,
    pub verify_url: String,
}

/// Email carrying the plaintext password-reset token inside a URL.
#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Reset your password - {{ app_name }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; }
        .button { display: inline-block; padding: 12px 24px; background-color: #dc3545; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ app_name }}</h1>
        </div>

        <h2>Reset Your Password</h2>

        <p>Hello {{ first_name }},</p>

        <p>We received a request to reset the password for your account. Click the button below to choose a new one.</p>

        <div style="text-align: center;">
            <a href="{{ reset_url }}" class="button">Reset Password</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ reset_url }}</p>

        <p>If you didn't request a password reset, you can safely ignore this email and your password will stay the same.</p>

        <div class="footer">
            <p>This email was sent by {{ app_name }}. If you have any questions, please contact our support team.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct PasswordResetTemplate {
    pub app_name: String,
    pub first_name: String,
    pub reset_url: String,
}
