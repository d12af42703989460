//! Built-in VideoRemix.vip FAQ.

use remix_core::types::Link;

use crate::knowledge::KnowledgeEntry;

fn entry(question: &str, answer: &str, links: &[(&str, &str)]) -> KnowledgeEntry {
    KnowledgeEntry::new(
        question,
        answer,
        links
            .iter()
            .map(|(text, url)| Link::new(*text, *url))
            .collect(),
    )
}

/// Entries in display order. The product overview stays first.
pub(crate) fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        // Getting started
        entry(
            "What is VideoRemix.vip?",
            "VideoRemix.vip is an AI-powered video creation platform. Pick a template, drop in your \
             footage, images or script, and our AI tools assemble a polished, on-brand video in \
             minutes. No editing experience needed.",
            &[("Explore Features", "/features"), ("Get Started", "/signup")],
        ),
        entry(
            "How do I get started?",
            "Create a free account, choose a template from the library, and follow the guided \
             editor. Your first video can be ready in under ten minutes.",
            &[("Sign Up", "/signup"), ("Getting Started Guide", "/help/getting-started")],
        ),
        entry(
            "Do I need video editing experience?",
            "Not at all. The guided editor handles cuts, transitions, captions and music for you. \
             Advanced users can still fine-tune every scene on the timeline.",
            &[("See the Editor", "/features/editor")],
        ),
        entry(
            "What are the pricing plans?",
            "We offer three plans: Free (watermarked exports up to 720p), Pro at $29/month (1080p \
             and 4K exports, no watermark, full template library), and Business with team seats, \
             brand kits and priority support.",
            &[("View Pricing", "/pricing")],
        ),
        entry(
            "Is there a free trial?",
            "Yes. Every new account starts on the Free plan, and Pro features can be tried for 14 \
             days without a credit card.",
            &[("Start Free Trial", "/signup")],
        ),
        entry(
            "How do I cancel my subscription?",
            "Open Account Settings, choose Billing, and click Cancel Subscription. You keep paid \
             features until the end of the current billing period.",
            &[("Billing Settings", "/account/billing")],
        ),
        entry(
            "Can I get a refund?",
            "Annual subscriptions can be refunded within 30 days of purchase. Monthly \
             subscriptions are not refunded but can be cancelled at any time.",
            &[("Refund Policy", "/legal/refunds"), ("Contact Support", "/contact")],
        ),
        entry(
            "What payment methods do you accept?",
            "We accept all major credit cards, PayPal, and bank transfer for annual Business \
             invoices.",
            &[("Billing Help", "/help/billing")],
        ),
        // Templates and creation
        entry(
            "How many templates are available?",
            "The template library has more than 500 professionally designed templates for \
             social ads, explainers, product demos, intros, slideshows and more. New templates are \
             added every week.",
            &[("Browse Templates", "/templates")],
        ),
        entry(
            "Can I customize templates?",
            "Every template is fully editable: swap media, change colors and fonts, reorder \
             scenes, and apply your brand kit in one click.",
            &[("Template Guide", "/help/templates")],
        ),
        entry(
            "What video formats can I export?",
            "Export MP4 or MOV in landscape, portrait and square aspect ratios. Pro and Business \
             plans export up to 4K resolution.",
            &[("Export Settings", "/help/exporting")],
        ),
        entry(
            "What file types can I upload?",
            "Upload MP4, MOV, WebM and AVI video, JPG, PNG and GIF images, and MP3 or WAV \
             audio. Individual uploads can be up to 2 GB.",
            &[("Upload Guide", "/help/uploads")],
        ),
        entry(
            "How long can my videos be?",
            "Free plan videos can run up to 5 minutes. Pro and Business videos can run up to 60 \
             minutes.",
            &[("Compare Plans", "/pricing")],
        ),
        // AI tools
        entry(
            "What AI tools are included?",
            "The AI suite includes script-to-video generation, automatic captions, AI voiceovers \
             in over 40 languages, smart scene detection, background removal, and an AI image \
             generator.",
            &[("AI Tools", "/features/ai-tools")],
        ),
        entry(
            "How does script-to-video work?",
            "Paste a script or a blog post URL. The AI splits it into scenes, picks matching stock \
             footage, writes on-screen text, and adds a voiceover you can edit.",
            &[("Script to Video", "/features/script-to-video")],
        ),
        entry(
            "Can the AI add captions automatically?",
            "Yes. Auto-captions transcribe your audio with high accuracy and let you restyle, \
             translate, or burn the subtitles into the final export.",
            &[("Auto Captions", "/features/captions")],
        ),
        entry(
            "Which languages do AI voiceovers support?",
            "AI voiceovers are available in more than 40 languages and 120 natural-sounding \
             voices, with adjustable speed and tone.",
            &[("Voiceover Guide", "/help/voiceovers")],
        ),
        // Media and rights
        entry(
            "Is stock footage included?",
            "All paid plans include unlimited access to millions of royalty-free stock videos, \
             images and music tracks inside the editor.",
            &[("Media Library", "/features/media-library")],
        ),
        entry(
            "Can I use my videos commercially?",
            "Videos exported on Pro or Business can be used commercially, including in paid ads \
             and client work. Free plan exports are for personal use.",
            &[("License Terms", "/legal/license")],
        ),
        // Teams and account
        entry(
            "Can I collaborate with my team?",
            "The Business plan adds shared workspaces, role-based permissions, comments on \
             scenes, and shared brand kits so your whole team stays on brand.",
            &[("Team Features", "/features/teams"), ("Business Plan", "/pricing")],
        ),
        entry(
            "How do I reset my password?",
            "Click Forgot Password on the sign-in page and follow the link we email you. The \
             link expires after one hour.",
            &[("Sign In", "/login")],
        ),
        entry(
            "Is my data secure?",
            "Uploads are encrypted in transit and at rest, and your projects are private unless \
             you choose to share them. We never use your media to train AI models.",
            &[("Privacy Policy", "/legal/privacy"), ("Security", "/security")],
        ),
        // Publishing and integrations
        entry(
            "Can I publish directly to social media?",
            "Yes. Connect YouTube, TikTok, Instagram, Facebook and LinkedIn accounts to publish \
             or schedule videos straight from the editor.",
            &[("Integrations", "/integrations")],
        ),
        entry(
            "Do you have an API?",
            "Business customers can generate videos programmatically through the REST API and \
             webhooks, ideal for personalized video at scale.",
            &[("API Docs", "/developers"), ("Contact Sales", "/contact")],
        ),
        entry(
            "Is there a mobile app?",
            "The editor works in any modern mobile browser, and native iOS and Android apps let \
             you record, edit and publish on the go.",
            &[("Download Apps", "/apps")],
        ),
        // Support
        entry(
            "How do I contact support?",
            "Our support team is available around the clock by live chat and email. Business \
             customers also get a dedicated account manager.",
            &[("Contact Support", "/contact"), ("Help Center", "/help")],
        ),
        entry(
            "Where can I find tutorials?",
            "The Help Center has step-by-step articles and the Academy offers free video courses \
             covering everything from your first edit to advanced motion graphics.",
            &[("Help Center", "/help"), ("Academy", "/academy")],
        ),
    ]
}
