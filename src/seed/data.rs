//! Fixed seed datasets for the `services` and `blog_posts` collections.
//!
//! This is the entire content catalog: six service offerings and three blog
//! posts. The seeder replaces whatever is in the store with exactly this data.

use crate::domain::entities::{BlogPost, Faq, Service};

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// The full fixed `services` dataset.
pub fn seed_services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            slug: "nexus-letters".to_string(),
            title: "Nexus Letters".to_string(),
            short_description: "Professional medical opinions linking service to condition"
                .to_string(),
            full_description: "A Nexus Letter is a comprehensive medical opinion that establishes \
                               a clear connection between your military service and your current \
                               medical condition. Written by qualified medical professionals, \
                               these letters provide the crucial evidence needed to support your \
                               VA disability claim."
                .to_string(),
            features: vec![
                "Record review".to_string(),
                "Direct/secondary/aggravation".to_string(),
                "Clear rationale".to_string(),
            ],
            base_price_in_inr: 4999,
            duration: "7-10 business days".to_string(),
            category: "nexus-letter".to_string(),
            icon: "file-text".to_string(),
            faqs: vec![
                faq(
                    "What is a nexus letter?",
                    "A nexus letter is a medical document that establishes the connection \
                     between your military service and your current disability.",
                ),
                faq(
                    "How long does it take?",
                    "Typically 7-10 business days from the time we receive all necessary \
                     medical records.",
                ),
            ],
        },
        Service {
            id: "2".to_string(),
            slug: "public-dbqs".to_string(),
            title: "Public DBQs".to_string(),
            short_description: "Standardized disability questionnaires for VA claims".to_string(),
            full_description: "Disability Benefits Questionnaires (DBQs) are standardized medical \
                               examination forms used by the VA to evaluate disability claims. \
                               Our licensed physicians complete these forms based on current VA \
                               guidelines and your medical condition."
                .to_string(),
            features: vec![
                "Latest public VA DBQs".to_string(),
                "Objective findings".to_string(),
                "Functional impact".to_string(),
            ],
            base_price_in_inr: 3999,
            duration: "5-7 business days".to_string(),
            category: "dbq".to_string(),
            icon: "clipboard".to_string(),
            faqs: vec![faq(
                "Do you complete VA DBQs?",
                "Yes, we complete public DBQs that are currently accepted by the VA for \
                 various conditions.",
            )],
        },
        Service {
            id: "3".to_string(),
            slug: "aid-attendance".to_string(),
            title: "Aid & Attendance (21-2680)".to_string(),
            short_description: "Enhanced pension benefits for veterans needing assistance"
                .to_string(),
            full_description: "Aid and Attendance is a benefit available to veterans and \
                               surviving spouses who require the regular assistance of another \
                               person. We provide comprehensive physician evaluations to support \
                               your A&A benefit claim."
                .to_string(),
            features: vec![
                "Physician evaluation".to_string(),
                "ADL documentation".to_string(),
                "When clinically indicated".to_string(),
            ],
            base_price_in_inr: 5999,
            duration: "10-14 business days".to_string(),
            category: "aid-attendance".to_string(),
            icon: "heart-pulse".to_string(),
            faqs: vec![faq(
                "Can you help with Aid & Attendance?",
                "Yes, we provide complete physician evaluations and documentation for VA \
                 Form 21-2680.",
            )],
        },
        Service {
            id: "4".to_string(),
            slug: "cp-coaching".to_string(),
            title: "C&P Coaching".to_string(),
            short_description: "Preparation for compensation and pension examinations".to_string(),
            full_description: "Prepare for your C&P exam with expert coaching. We help you \
                               understand what to expect, how to accurately report your symptoms, \
                               and provide tips to ensure your disabilities are properly \
                               documented."
                .to_string(),
            features: vec![
                "What to expect".to_string(),
                "Accurate symptom reporting".to_string(),
                "Logbooks & lay tips".to_string(),
            ],
            base_price_in_inr: 2499,
            duration: "Same day or next business day".to_string(),
            category: "coaching".to_string(),
            icon: "users".to_string(),
            faqs: vec![faq(
                "What is C&P coaching?",
                "C&P coaching prepares you for your Compensation and Pension exam, helping \
                 you understand the process and communicate your condition effectively.",
            )],
        },
        Service {
            id: "5".to_string(),
            slug: "claim-strategy".to_string(),
            title: "Claim Strategy Consult".to_string(),
            short_description: "Strategic guidance for complex VA claims".to_string(),
            full_description: "Get expert strategic guidance for your VA claim. We review your \
                               evidence, identify gaps, and provide recommendations on how to \
                               strengthen your case for the best possible outcome."
                .to_string(),
            features: vec![
                "Evidence gap map".to_string(),
                "Secondary links".to_string(),
                "Testing/referrals".to_string(),
            ],
            base_price_in_inr: 3499,
            duration: "3-5 business days".to_string(),
            category: "consulting".to_string(),
            icon: "lightbulb".to_string(),
            faqs: vec![faq(
                "What does a strategy consult include?",
                "A comprehensive review of your claim with specific recommendations on \
                 evidence needed and next steps.",
            )],
        },
        Service {
            id: "6".to_string(),
            slug: "record-review".to_string(),
            title: "Record Review".to_string(),
            short_description: "Professional analysis of your medical documentation".to_string(),
            full_description: "Our medical professionals review your service and medical records \
                               to identify conditions eligible for VA compensation, build a \
                               comprehensive timeline, and prepare targeted questions for your \
                               providers."
                .to_string(),
            features: vec![
                "Service/med records synthesis".to_string(),
                "Timeline build".to_string(),
                "Provider question set".to_string(),
            ],
            base_price_in_inr: 2999,
            duration: "5-7 business days".to_string(),
            category: "review".to_string(),
            icon: "file-search".to_string(),
            faqs: vec![faq(
                "What records should I provide?",
                "Please provide your service treatment records, VA medical records, and any \
                 private medical records related to your conditions.",
            )],
        },
    ]
}

/// The full fixed `blog_posts` dataset.
pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            slug: "what-is-nexus-letter".to_string(),
            title: "What is a Nexus Letter?".to_string(),
            excerpt: "Plain-English explanation of nexus opinions and what they should include."
                .to_string(),
            content_html: "<h2>Understanding Nexus Letters</h2><p>A nexus letter is a medical \
                           document that establishes a connection between your military service \
                           and your current medical condition. The term 'nexus' means connection \
                           or link.</p><h3>Key Components</h3><ul><li>Review of service \
                           records</li><li>Review of medical records</li><li>Medical \
                           rationale</li><li>Opinion to at least as likely as not \
                           standard</li></ul><p>A well-written nexus letter can be the \
                           difference between an approved and denied claim.</p>"
                .to_string(),
            category: "nexus-letters".to_string(),
            tags: vec!["nexus".to_string(), "medical opinion".to_string()],
            author_name: "Dr. Sarah Johnson".to_string(),
            published_at: "SEPT 2025".to_string(),
            read_time: "5 min read".to_string(),
        },
        BlogPost {
            id: "2".to_string(),
            slug: "how-to-prepare-cp-exam".to_string(),
            title: "How to Prepare for a C&P Exam".to_string(),
            excerpt: "What to expect at the claim exam and how to communicate symptoms accurately."
                .to_string(),
            content_html: "<h2>Preparing for Your C&P Exam</h2><p>The Compensation and Pension \
                           (C&P) exam is a critical step in the VA claims process. Here's how to \
                           prepare.</p><h3>Before the Exam</h3><ul><li>Gather all relevant \
                           medical records</li><li>Keep a symptom diary for at least 2 \
                           weeks</li><li>List all medications and treatments</li><li>Note how \
                           conditions affect daily life</li></ul><h3>During the \
                           Exam</h3><p>Be honest, thorough, and describe your worst days. The \
                           examiner needs to understand the full impact of your condition.</p>"
                .to_string(),
            category: "exam-prep".to_string(),
            tags: vec!["C&P".to_string(), "exam prep".to_string()],
            author_name: "Military Disability Team".to_string(),
            published_at: "SEPT 2025".to_string(),
            read_time: "7 min read".to_string(),
        },
        BlogPost {
            id: "3".to_string(),
            slug: "aid-attendance-quick-guide".to_string(),
            title: "Aid & Attendance (VA Form 21-2680): A Quick Guide".to_string(),
            excerpt: "When A&A is appropriate, ADL documentation tips, and physician evaluation \
                      basics."
                .to_string(),
            content_html: "<h2>Aid & Attendance Benefits</h2><p>Aid and Attendance (A&A) is an \
                           additional benefit for veterans who need help with activities of \
                           daily living (ADLs).</p><h3>Who Qualifies?</h3><p>Veterans who \
                           require assistance with:</p><ul><li>Bathing or dressing</li><li>Eating \
                           or using the bathroom</li><li>Adjusting prosthetic \
                           devices</li><li>Protection from hazards due to mental \
                           conditions</li></ul><h3>Required Documentation</h3><p>VA Form 21-2680 \
                           must be completed by a physician who examines the veteran and \
                           documents their need for regular aid and attendance.</p>"
                .to_string(),
            category: "aid-attendance".to_string(),
            tags: vec!["aid & attendance".to_string(), "21-2680".to_string()],
            author_name: "Dr. Michael Chen".to_string(),
            published_at: "SEPT 2025".to_string(),
            read_time: "6 min read".to_string(),
        },
    ]
}
