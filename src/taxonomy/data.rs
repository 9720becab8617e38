//! Default hand-authored taxonomy tables.
//!
//! Alias keys map surface forms to canonical skill names. Every canonical
//! name also appears as its own alias so canonicalization is idempotent.

/// Surface form -> canonical skill.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    // Programming languages
    ("python", "python"),
    ("py", "python"),
    ("python3", "python"),
    ("python 3", "python"),
    ("java", "java"),
    ("java 8", "java"),
    ("javascript", "javascript"),
    ("js", "javascript"),
    ("ecmascript", "javascript"),
    ("typescript", "typescript"),
    ("ts", "typescript"),
    ("c++", "c++"),
    ("cpp", "c++"),
    ("c plus plus", "c++"),
    ("c#", "c#"),
    ("csharp", "c#"),
    ("c sharp", "c#"),
    (".net", "c#"),
    ("dotnet", "c#"),
    ("c programming", "c programming"),
    ("ansi c", "c programming"),
    ("go", "golang"),
    ("golang", "golang"),
    ("go lang", "golang"),
    ("rust", "rust"),
    ("rust lang", "rust"),
    ("ruby", "ruby"),
    ("php", "php"),
    ("swift", "swift"),
    ("objective-c", "objective-c"),
    ("kotlin", "kotlin"),
    ("scala", "scala"),
    ("dart", "dart"),
    ("r programming", "r programming"),
    ("rlang", "r programming"),
    ("matlab", "matlab"),
    ("perl", "perl"),
    ("bash", "bash"),
    ("shell scripting", "bash"),
    ("sql", "sql"),
    ("structured query language", "sql"),
    ("nosql", "nosql"),
    ("html", "html"),
    ("html5", "html"),
    ("css", "css"),
    ("css3", "css"),
    // Web frameworks
    ("react", "react"),
    ("reactjs", "react"),
    ("react js", "react"),
    ("angular", "angular"),
    ("angularjs", "angular"),
    ("vue", "vue"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("svelte", "svelte"),
    ("next.js", "next.js"),
    ("nextjs", "next.js"),
    ("node.js", "node.js"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("express.js", "express.js"),
    ("express", "express.js"),
    ("django", "django"),
    ("flask", "flask"),
    ("fastapi", "fastapi"),
    ("spring boot", "spring boot"),
    ("spring framework", "spring framework"),
    ("spring", "spring framework"),
    ("ruby on rails", "ruby on rails"),
    ("rails", "ruby on rails"),
    ("laravel", "laravel"),
    ("asp.net", "asp.net"),
    ("jquery", "jquery"),
    ("bootstrap", "bootstrap"),
    ("tailwind css", "tailwind css"),
    ("tailwind", "tailwind css"),
    ("sass", "sass"),
    ("web development", "web development"),
    ("front end", "front end"),
    ("frontend", "front end"),
    ("back end", "back end"),
    ("backend", "back end"),
    ("api development", "api development"),
    ("rest api", "rest api"),
    ("rest apis", "rest api"),
    ("restful api", "rest api"),
    ("graphql", "graphql"),
    ("grpc", "grpc"),
    ("microservices", "microservices"),
    // Mobile
    ("react native", "react native"),
    ("flutter", "flutter"),
    ("android development", "android development"),
    ("android", "android development"),
    ("ios development", "ios development"),
    ("ios", "ios development"),
    ("mobile development", "mobile development"),
    // Data science / ML
    ("machine learning", "machine learning"),
    ("ml", "machine learning"),
    ("deep learning", "deep learning"),
    ("dl", "deep learning"),
    ("artificial intelligence", "artificial intelligence"),
    ("ai", "artificial intelligence"),
    ("natural language processing", "natural language processing"),
    ("nlp", "natural language processing"),
    ("computer vision", "computer vision"),
    ("data science", "data science"),
    ("data analytics", "data analytics"),
    ("data analysis", "data analytics"),
    ("statistical analysis", "statistical analysis"),
    ("statistics", "statistical analysis"),
    ("data engineering", "data engineering"),
    ("data warehousing", "data warehousing"),
    ("etl", "etl"),
    ("big data", "big data"),
    ("pandas", "pandas"),
    ("numpy", "numpy"),
    ("scipy", "scipy"),
    ("scikit-learn", "scikit-learn"),
    ("sklearn", "scikit-learn"),
    ("tensorflow", "tensorflow"),
    ("pytorch", "pytorch"),
    ("keras", "keras"),
    ("xgboost", "xgboost"),
    ("opencv", "opencv"),
    ("spacy", "spacy"),
    ("nltk", "nltk"),
    ("hadoop", "hadoop"),
    ("apache spark", "apache spark"),
    ("spark", "apache spark"),
    ("kafka", "kafka"),
    ("apache kafka", "kafka"),
    ("airflow", "airflow"),
    ("snowflake", "snowflake"),
    ("databricks", "databricks"),
    ("dbt", "dbt"),
    // BI / visualization
    ("data visualization", "data visualization"),
    ("business intelligence", "business intelligence"),
    ("bi", "business intelligence"),
    ("dashboarding", "dashboarding"),
    ("tableau", "tableau"),
    ("power bi", "power bi"),
    ("powerbi", "power bi"),
    ("qlikview", "qlikview"),
    ("qlik", "qlikview"),
    ("looker", "looker"),
    ("metabase", "metabase"),
    ("superset", "superset"),
    ("matplotlib", "matplotlib"),
    ("seaborn", "seaborn"),
    ("plotly", "plotly"),
    ("d3.js", "d3.js"),
    ("d3", "d3.js"),
    ("excel", "microsoft excel"),
    ("microsoft excel", "microsoft excel"),
    ("ms excel", "microsoft excel"),
    // Databases
    ("mysql", "mysql"),
    ("postgresql", "postgresql"),
    ("postgres", "postgresql"),
    ("oracle database", "oracle database"),
    ("sql server", "sql server"),
    ("mssql", "sql server"),
    ("mongodb", "mongodb"),
    ("mongo", "mongodb"),
    ("redis", "redis"),
    ("elasticsearch", "elasticsearch"),
    ("cassandra", "cassandra"),
    ("dynamodb", "dynamodb"),
    ("couchdb", "couchdb"),
    ("sqlite", "sqlite"),
    ("neo4j", "neo4j"),
    ("firebase", "firebase"),
    ("database management", "database management"),
    ("relational database", "relational database"),
    ("caching", "caching"),
    // Cloud
    ("aws", "amazon web services"),
    ("amazon web services", "amazon web services"),
    ("amazon aws", "amazon web services"),
    ("ec2", "amazon ec2"),
    ("amazon ec2", "amazon ec2"),
    ("s3", "amazon s3"),
    ("amazon s3", "amazon s3"),
    ("aws lambda", "aws lambda"),
    ("lambda", "aws lambda"),
    ("amazon rds", "amazon rds"),
    ("redshift", "redshift"),
    ("sagemaker", "sagemaker"),
    ("azure", "microsoft azure"),
    ("microsoft azure", "microsoft azure"),
    ("gcp", "google cloud platform"),
    ("google cloud", "google cloud platform"),
    ("google cloud platform", "google cloud platform"),
    ("bigquery", "bigquery"),
    ("cloud computing", "cloud computing"),
    ("serverless architecture", "serverless architecture"),
    ("serverless", "serverless architecture"),
    ("infrastructure", "infrastructure"),
    ("infrastructure as code", "infrastructure as code"),
    ("iac", "infrastructure as code"),
    // DevOps
    ("docker", "docker"),
    ("dockerfile", "docker"),
    ("containerization", "containerization"),
    ("kubernetes", "kubernetes"),
    ("k8s", "kubernetes"),
    ("kube", "kubernetes"),
    ("podman", "podman"),
    ("containerd", "containerd"),
    ("helm", "helm"),
    ("jenkins", "jenkins"),
    ("gitlab ci", "gitlab ci"),
    ("github actions", "github actions"),
    ("circle ci", "circle ci"),
    ("circleci", "circle ci"),
    ("ci/cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("continuous integration", "ci/cd"),
    ("devops", "devops"),
    ("terraform", "terraform"),
    ("cloudformation", "cloudformation"),
    ("pulumi", "pulumi"),
    ("ansible", "ansible"),
    ("puppet", "puppet"),
    ("chef", "chef"),
    ("prometheus", "prometheus"),
    ("grafana", "grafana"),
    ("datadog", "datadog"),
    ("splunk", "splunk"),
    ("monitoring", "monitoring"),
    ("observability", "observability"),
    ("automation", "automation"),
    ("orchestration", "orchestration"),
    ("linux", "linux"),
    ("unix", "linux"),
    // Version control
    ("git", "git"),
    ("github", "github"),
    ("gitlab", "gitlab"),
    ("bitbucket", "bitbucket"),
    ("version control", "version control"),
    // Testing
    ("selenium", "selenium"),
    ("cypress", "cypress"),
    ("jest", "jest"),
    ("pytest", "pytest"),
    ("junit", "junit"),
    ("postman", "postman"),
    ("test automation", "test automation"),
    ("unit testing", "unit testing"),
    ("quality assurance", "quality assurance"),
    ("qa", "quality assurance"),
    // Project / business tools
    ("jira", "jira"),
    ("confluence", "confluence"),
    ("trello", "trello"),
    ("asana", "asana"),
    ("salesforce", "salesforce"),
    ("hubspot", "hubspot"),
    ("sap", "sap"),
    ("crm", "crm"),
    ("erp", "erp"),
    ("project management", "project management"),
    ("agile methodology", "agile methodology"),
    ("agile", "agile methodology"),
    ("scrum", "scrum"),
    ("kanban", "kanban"),
    ("stakeholder management", "stakeholder management"),
    // Design
    ("figma", "figma"),
    ("sketch", "sketch"),
    ("adobe photoshop", "adobe photoshop"),
    ("photoshop", "adobe photoshop"),
    ("adobe illustrator", "adobe illustrator"),
    ("ui design", "ui design"),
    ("ux design", "ux design"),
    ("graphic design", "graphic design"),
    // Marketing / analytics
    ("google analytics", "google analytics"),
    ("google ads", "google ads"),
    ("digital marketing", "digital marketing"),
    ("seo", "seo"),
    ("web analytics", "web analytics"),
    // Soft skills
    ("communication skills", "communication skills"),
    ("communication", "communication skills"),
    ("verbal communication", "communication skills"),
    ("written communication", "communication skills"),
    ("teamwork", "teamwork"),
    ("team player", "teamwork"),
    ("collaboration", "collaboration"),
    ("team collaboration", "collaboration"),
    ("leadership", "leadership"),
    ("team leadership", "leadership"),
    ("people management", "leadership"),
    ("problem solving", "problem solving"),
    ("troubleshooting", "problem solving"),
    ("critical thinking", "critical thinking"),
    ("analytical thinking", "critical thinking"),
    ("adaptability", "adaptability"),
    ("flexibility", "adaptability"),
    ("time management", "time management"),
    ("creativity", "creativity"),
];

/// Blacklisted tokens that must never be extracted as skills.
pub(crate) const NON_SKILLS: &[&str] = &[
    // Generic requirement words
    "able", "ability", "must", "required", "experience", "experienced",
    "using", "need", "needs", "needed", "description", "job", "position",
    "candidate", "candidates", "resume", "cv",
    // Company words
    "corp", "corporation", "company", "inc", "ltd", "llc",
    "organization", "enterprise", "firm", "agency",
    // Contact words
    "email", "phone", "address", "contact", "location", "website",
    "apply", "application", "applicant", "hiring", "recruitment", "recruiter",
    // Job titles, not skills
    "analyst", "developer", "engineer", "programmer", "designer",
    "manager", "director", "coordinator", "specialist", "consultant",
    "administrator", "associate", "executive", "officer", "lead",
    "senior", "junior", "intern", "trainee", "architect", "technician",
    // Action verbs
    "managed", "manage", "managing", "developed", "develop", "developing",
    "created", "create", "creating", "designed", "designing",
    "implemented", "implement", "implementing", "built", "build", "building",
    "led", "leading", "worked", "work", "working",
    // Qualifiers
    "strong", "excellent", "good", "great", "outstanding", "exceptional",
    "proficient", "expert", "skilled", "talented", "capable",
    "proven", "demonstrated", "extensive", "comprehensive",
    // Time words
    "years", "year", "months", "month", "weeks", "week", "days", "day",
    "current", "currently", "previous", "previously", "former", "past",
    // Generic adjectives
    "high", "low", "new", "old", "best", "better", "latest", "modern",
    "advanced", "basic", "intermediate", "beginner", "professional",
];

/// Filler words stripped from extracted phrases and ignored as skills.
pub(crate) const STOP_WORDS: &[&str] = &[
    "experience", "experienced", "years", "year", "months", "month",
    "work", "worked", "working", "job", "jobs", "role", "roles",
    "candidate", "candidates", "team", "teams", "company", "companies",
    "responsible", "responsibilities", "duties", "skills", "skill",
    "knowledge", "expertise", "using", "used", "use", "utilize", "utilized",
    "strong", "excellent", "good", "great", "outstanding", "proficient",
    "proficiency", "familiar", "familiarity", "better", "best",
    "ability", "abilities", "capable", "demonstrated", "proven",
    "with", "and", "in", "on", "for", "of", "the", "a", "an", "at",
    "by", "to", "from", "as", "or", "but", "if", "while", "during",
    "through", "various", "multiple", "several", "many",
    "current", "currently", "previous", "previously", "former",
    "position", "positions", "project", "projects",
    "must", "have", "required", "preferred", "plus", "bonus",
    "we", "our", "you", "your", "they", "their", "this", "that",
    "accept", "value", "seek", "seeking", "want", "looking",
];

/// One-hop implications: holding the key implies the listed broader skills.
pub(crate) const IMPLIES: &[(&str, &[&str])] = &[
    ("tableau", &["data visualization", "business intelligence", "data analytics", "dashboarding"]),
    ("power bi", &["data visualization", "business intelligence", "data analytics", "dashboarding"]),
    ("qlikview", &["data visualization", "business intelligence", "data analytics"]),
    ("looker", &["data visualization", "business intelligence", "data analytics"]),
    ("metabase", &["data visualization", "business intelligence"]),
    ("superset", &["data visualization", "business intelligence"]),
    ("matplotlib", &["data visualization", "data analytics"]),
    ("seaborn", &["data visualization", "data analytics"]),
    ("plotly", &["data visualization", "data analytics"]),
    ("d3.js", &["data visualization", "javascript"]),
    ("pandas", &["data analytics", "data science", "python"]),
    ("numpy", &["data analytics", "data science", "python"]),
    ("scipy", &["data analytics", "data science", "python"]),
    ("r programming", &["data analytics", "data science", "statistical analysis"]),
    ("scikit-learn", &["machine learning", "data science", "python"]),
    ("tensorflow", &["machine learning", "deep learning", "artificial intelligence", "python"]),
    ("pytorch", &["machine learning", "deep learning", "artificial intelligence", "python"]),
    ("keras", &["machine learning", "deep learning", "artificial intelligence", "python"]),
    ("xgboost", &["machine learning", "data science"]),
    ("spacy", &["natural language processing", "python"]),
    ("nltk", &["natural language processing", "python"]),
    ("opencv", &["computer vision", "python"]),
    ("react", &["javascript", "web development", "front end"]),
    ("angular", &["javascript", "typescript", "web development", "front end"]),
    ("vue", &["javascript", "web development", "front end"]),
    ("svelte", &["javascript", "web development", "front end"]),
    ("next.js", &["react", "javascript", "web development", "front end"]),
    ("jquery", &["javascript", "web development"]),
    ("bootstrap", &["css", "web development"]),
    ("tailwind css", &["css", "web development"]),
    ("sass", &["css", "web development"]),
    ("node.js", &["javascript", "web development", "back end"]),
    ("express.js", &["node.js", "javascript", "web development", "back end"]),
    ("django", &["python", "web development", "back end"]),
    ("flask", &["python", "web development", "back end"]),
    ("fastapi", &["python", "web development", "back end", "api development"]),
    ("spring boot", &["java", "spring framework", "web development", "back end"]),
    ("spring framework", &["java", "web development", "back end"]),
    ("ruby on rails", &["ruby", "web development", "back end"]),
    ("laravel", &["php", "web development", "back end"]),
    ("asp.net", &["c#", "web development", "back end"]),
    ("react native", &["javascript", "react", "mobile development"]),
    ("flutter", &["dart", "mobile development"]),
    ("android development", &["java", "kotlin", "mobile development"]),
    ("ios development", &["swift", "objective-c", "mobile development"]),
    ("mysql", &["sql", "database management", "relational database"]),
    ("postgresql", &["sql", "database management", "relational database"]),
    ("oracle database", &["sql", "database management", "relational database"]),
    ("sql server", &["sql", "database management", "relational database"]),
    ("mongodb", &["nosql", "database management"]),
    ("redis", &["nosql", "database management", "caching"]),
    ("elasticsearch", &["nosql", "database management"]),
    ("cassandra", &["nosql", "database management", "big data"]),
    ("dynamodb", &["nosql", "database management", "amazon web services"]),
    ("firebase", &["nosql", "database management", "back end"]),
    ("amazon ec2", &["amazon web services", "cloud computing", "infrastructure"]),
    ("amazon s3", &["amazon web services", "cloud computing"]),
    ("aws lambda", &["amazon web services", "cloud computing", "serverless architecture"]),
    ("amazon rds", &["amazon web services", "cloud computing", "database management"]),
    ("sagemaker", &["amazon web services", "machine learning", "cloud computing"]),
    ("redshift", &["amazon web services", "data warehousing", "cloud computing"]),
    ("bigquery", &["google cloud platform", "data warehousing", "sql", "cloud computing"]),
    ("docker", &["containerization", "devops", "cloud computing"]),
    ("kubernetes", &["containerization", "devops", "cloud computing", "orchestration"]),
    ("jenkins", &["ci/cd", "devops", "automation"]),
    ("gitlab ci", &["ci/cd", "devops", "automation"]),
    ("github actions", &["ci/cd", "devops", "automation"]),
    ("circle ci", &["ci/cd", "devops", "automation"]),
    ("terraform", &["infrastructure as code", "devops", "cloud computing"]),
    ("ansible", &["infrastructure as code", "devops", "automation"]),
    ("helm", &["kubernetes", "devops"]),
    ("prometheus", &["monitoring", "devops", "observability"]),
    ("grafana", &["monitoring", "devops", "data visualization", "observability"]),
    ("datadog", &["monitoring", "devops", "observability"]),
    ("hadoop", &["big data", "data engineering"]),
    ("apache spark", &["big data", "data engineering"]),
    ("kafka", &["big data", "data engineering"]),
    ("airflow", &["data engineering", "automation", "etl"]),
    ("snowflake", &["data warehousing", "cloud computing", "sql"]),
    ("databricks", &["big data", "data engineering", "apache spark", "machine learning"]),
    ("dbt", &["data engineering", "data warehousing", "sql", "etl"]),
    ("rest api", &["api development", "back end"]),
    ("graphql", &["api development", "back end"]),
    ("grpc", &["api development", "back end"]),
    ("figma", &["ui design", "ux design", "collaboration"]),
    ("sketch", &["ui design", "ux design"]),
    ("adobe photoshop", &["graphic design"]),
    ("adobe illustrator", &["graphic design"]),
    ("salesforce", &["crm"]),
    ("hubspot", &["crm", "digital marketing"]),
    ("sap", &["erp"]),
    ("jira", &["project management", "agile methodology"]),
    ("confluence", &["project management", "collaboration"]),
    ("trello", &["project management", "kanban"]),
    ("asana", &["project management", "collaboration"]),
    ("google analytics", &["digital marketing", "web analytics", "data analytics"]),
    ("google ads", &["digital marketing"]),
    ("selenium", &["test automation", "quality assurance"]),
    ("cypress", &["test automation", "javascript"]),
    ("jest", &["test automation", "javascript", "unit testing"]),
    ("pytest", &["test automation", "python", "unit testing"]),
    ("junit", &["test automation", "java", "unit testing"]),
    ("postman", &["rest api", "quality assurance"]),
    ("git", &["version control", "collaboration"]),
    ("github", &["version control", "git", "collaboration", "devops"]),
    ("gitlab", &["version control", "git", "collaboration", "devops", "ci/cd"]),
    ("bitbucket", &["version control", "git", "collaboration"]),
];

/// Symmetric same-category substitutes (near-full credit).
pub(crate) const EQUIVALENTS: &[(&str, &[&str])] = &[
    ("tableau", &["power bi", "qlikview", "looker"]),
    ("power bi", &["tableau", "qlikview", "looker"]),
    ("qlikview", &["tableau", "power bi", "looker"]),
    ("looker", &["tableau", "power bi", "qlikview"]),
    ("react", &["angular", "vue", "svelte"]),
    ("angular", &["react", "vue", "svelte"]),
    ("vue", &["react", "angular", "svelte"]),
    ("svelte", &["react", "angular", "vue"]),
    ("mysql", &["postgresql", "sql server", "oracle database"]),
    ("postgresql", &["mysql", "sql server", "oracle database"]),
    ("sql server", &["mysql", "postgresql", "oracle database"]),
    ("oracle database", &["mysql", "postgresql", "sql server"]),
    ("mongodb", &["dynamodb", "couchdb", "cassandra"]),
    ("docker", &["podman", "containerd"]),
    ("jenkins", &["gitlab ci", "github actions", "circle ci"]),
    ("gitlab ci", &["jenkins", "github actions", "circle ci"]),
    ("github actions", &["jenkins", "gitlab ci", "circle ci"]),
    ("terraform", &["cloudformation", "pulumi"]),
    ("amazon web services", &["microsoft azure", "google cloud platform"]),
    ("microsoft azure", &["amazon web services", "google cloud platform"]),
    ("google cloud platform", &["amazon web services", "microsoft azure"]),
];

/// Broader skill -> narrower/adjacent skills that earn moderate credit.
pub(crate) const RELATED: &[(&str, &[&str])] = &[
    ("python", &["django", "flask", "fastapi", "pandas", "numpy"]),
    ("javascript", &["react", "angular", "vue", "node.js", "typescript"]),
    ("web development", &["react", "angular", "vue", "html", "css", "node.js"]),
    ("database management", &["mysql", "postgresql", "mongodb", "sql"]),
    ("cloud computing", &["amazon web services", "microsoft azure", "google cloud platform"]),
    ("data science", &["machine learning", "data analytics", "pandas", "numpy"]),
    ("machine learning", &["tensorflow", "pytorch", "scikit-learn"]),
    ("data visualization", &["tableau", "power bi", "matplotlib", "seaborn", "plotly"]),
    ("devops", &["docker", "kubernetes", "jenkins", "terraform", "ansible"]),
];
