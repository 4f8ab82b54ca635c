//! Static per-page SEO defaults.
//!
//! Two tables: top-level pages keyed by their first path segment, and course
//! pages keyed by the slug under `/courses/`.

use crate::seo::{Course, MetaFields};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Default fields for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub course: Option<Course>,
}

impl PageConfig {
    const fn page(
        key: &'static str,
        title: &'static str,
        description: &'static str,
        keywords: &'static str,
    ) -> Self {
        Self {
            key,
            title,
            description,
            keywords,
            course: None,
        }
    }

    /// Seed `MetaFields` from this record.
    pub fn to_fields(&self) -> MetaFields {
        MetaFields {
            title: Some(self.title.to_owned()),
            description: Some(self.description.to_owned()),
            keywords: Some(self.keywords.to_owned()),
            course: self.course.clone(),
            ..Default::default()
        }
    }
}

type PageMap = FxHashMap<&'static str, PageConfig>;

static PAGES: LazyLock<PageMap> = LazyLock::new(|| {
    [
        PageConfig::page(
            "home",
            "Launch Your Tech Career in 6 Months",
            "Transform your career with job-oriented tech courses. Expert mentorship, real-world \
             projects, and 95% placement rate. Start your tech journey today.",
            "tech career, coding bootcamp, data science course, full stack development, career \
             change, tech training, programming courses",
        ),
        PageConfig::page(
            "courses",
            "Tech Courses - Data Science, Full Stack, Cloud & More",
            "Explore our comprehensive tech courses designed for job readiness. Data Science, \
             Full Stack Development, Cloud Infrastructure, Machine Learning & more.",
            "tech courses, data science course, full stack development course, cloud computing \
             course, machine learning course, programming courses",
        ),
        PageConfig::page(
            "career-tracks",
            "Career Tracks - Complete Job-Ready Programs",
            "Comprehensive career tracks combining multiple courses for complete career \
             transformation. AI Engineer, Full Stack Engineer, Cloud Infrastructure tracks.",
            "career tracks, tech career path, AI engineer track, full stack engineer track, \
             cloud infrastructure track, job ready programs",
        ),
        PageConfig::page(
            "mentorship",
            "1:1 Mentorship Program - Learn from Industry Experts",
            "Get personalized guidance from industry experts working at Google, Microsoft, \
             Amazon. 1:1 mentorship sessions, career planning, and interview preparation.",
            "1:1 mentorship, tech mentorship, industry experts, career guidance, interview \
             preparation, tech mentor",
        ),
        PageConfig::page(
            "blog",
            "Tech Blog - Career Tips, Tutorials & Industry Insights",
            "Stay updated with latest tech trends, career advice, tutorials, and success \
             stories. Expert insights on Data Science, AI, Full Stack Development & more.",
            "tech blog, career tips, programming tutorials, tech trends, data science blog, AI \
             trends, coding tutorials",
        ),
        PageConfig::page(
            "enroll-now",
            "Enroll Now - Start Your Tech Career Journey",
            "Ready to transform your career? Enroll in our job-oriented tech courses with expert \
             mentorship and guaranteed placement support.",
            "enroll tech course, join coding bootcamp, tech course admission, career change \
             program, tech training enrollment",
        ),
    ]
    .into_iter()
    .map(|page| (page.key, page))
    .collect()
});

static COURSES: LazyLock<PageMap> = LazyLock::new(|| {
    [
        course_page(
            "data-science-advanced",
            "Advanced Data Science & AI Course - 12 Weeks Job-Ready Program",
            "Master machine learning, deep learning, and AI fundamentals with hands-on projects. \
             95% placement rate, expert mentorship, and industry-recognized certification.",
            "data science course, machine learning course, AI course, deep learning course, data \
             science training, ML engineer course",
            Course {
                title: "Advanced Data Science & AI".into(),
                description: "Master machine learning, deep learning, and AI fundamentals with \
                              hands-on projects"
                    .into(),
                duration: Some("12 weeks".into()),
                level: Some("Intermediate".into()),
                mode: Some("Online/Offline".into()),
                price: Some("₹85,000".into()),
                rating: Some(4.8),
                students: Some(245),
            },
        ),
        course_page(
            "full-stack-development",
            "Full Stack Web Development Course - React, Node.js & More",
            "Build end-to-end web applications with React, Node.js, and modern technologies. \
             16-week comprehensive program with real-world projects.",
            "full stack course, web development course, React course, Node.js course, JavaScript \
             course, full stack developer training",
            Course {
                title: "Full Stack Web Development".into(),
                description: "Build end-to-end web applications with React, Node.js, and modern \
                              technologies"
                    .into(),
                duration: Some("16 weeks".into()),
                level: Some("Beginner".into()),
                mode: Some("Online/Offline".into()),
                price: Some("₹65,000".into()),
                rating: Some(4.9),
                students: Some(320),
            },
        ),
        course_page(
            "cloud-infrastructure",
            "Cloud Infrastructure & DevOps Course - AWS, Azure, Kubernetes",
            "Master AWS, Azure, Kubernetes, and DevOps practices for scalable applications. \
             10-week intensive program with hands-on labs.",
            "cloud computing course, AWS course, DevOps course, Kubernetes course, cloud \
             infrastructure training, Azure course",
            Course {
                title: "Cloud Infrastructure & DevOps".into(),
                description: "Master AWS, Azure, Kubernetes, and DevOps practices for scalable \
                              applications"
                    .into(),
                duration: Some("10 weeks".into()),
                level: Some("Intermediate".into()),
                mode: Some("Online".into()),
                price: Some("₹55,000".into()),
                rating: Some(4.7),
                students: Some(180),
            },
        ),
    ]
    .into_iter()
    .map(|page| (page.key, page))
    .collect()
});

fn course_page(
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static str,
    course: Course,
) -> PageConfig {
    PageConfig {
        course: Some(course),
        ..PageConfig::page(slug, title, description, keywords)
    }
}

/// Static record for a top-level page key; `None` for unknown keys.
pub fn lookup(page_key: &str) -> Option<&'static PageConfig> {
    PAGES.get(page_key)
}

/// Static record for a course slug (the segment after `/courses/`).
pub fn course(slug: &str) -> Option<&'static PageConfig> {
    COURSES.get(slug)
}

/// Record for a route path: `/` is home, `/{key}` a top-level page,
/// `/courses/{slug}` a course page.
pub fn for_path(pathname: &str) -> Option<&'static PageConfig> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => lookup("home"),
        [key] => lookup(key),
        ["courses", slug] => course(slug),
        _ => None,
    }
}
