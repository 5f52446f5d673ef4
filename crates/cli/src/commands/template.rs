use saber_tudo_core::config::SiteSettings;
use saber_tudo_core::paths::{GENERATE, HOME, SEARCH, category_path, tutorial_path};
use saber_tudo_core::query::{by_category, recent};
use saber_tudo_core::{Article, Category};
use std::borrow::Borrow;

/// Characters of introduction shown on listing cards
const EXCERPT_CHARS: usize = 140;

/// Whether pages are served live or written to disk.
///
/// Static pages have no server behind them, so the search box and the
/// generator links are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Interactive,
    Static,
}

impl RenderMode {
    fn is_interactive(self) -> bool {
        self == RenderMode::Interactive
    }
}

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Context for display.
///
/// Built-in articles carry trusted template HTML. Generated context is
/// model output, so it is escaped and split into paragraphs on blank lines.
pub fn render_context(article: &Article) -> String {
    if !article.is_generated {
        return article.context.clone();
    }

    article
        .context
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shared page chrome: header with navigation, optional search box, footer
fn layout(site: &SiteSettings, title: &str, body: &str, mode: RenderMode) -> String {
    let nav: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}">{}</a>"#,
                html_escape(&category_path(c.as_str())),
                html_escape(c.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let tools = if mode.is_interactive() {
        format!(
            r#"<form class="search" action="{}" method="get">
                <input type="search" name="q" placeholder="O que você quer aprender?" aria-label="Buscar">
            </form>
            <a class="cta" href="{}">Criar Tutorial com IA</a>"#,
            SEARCH, GENERATE
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {site_name}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            color: #1e293b;
            background: #f8fafc;
        }}
        a {{ color: #4f46e5; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        header {{
            background: white;
            border-bottom: 1px solid #e2e8f0;
            padding: 1rem 2rem;
        }}
        .topbar {{
            max-width: 1100px;
            margin: 0 auto;
            display: flex;
            gap: 1.5rem;
            align-items: center;
            flex-wrap: wrap;
        }}
        .brand {{ font-size: 1.4rem; font-weight: 800; color: #1e293b; }}
        .search {{ flex: 1; min-width: 200px; }}
        .search input {{
            width: 100%;
            padding: 0.5rem 1rem;
            border: 1px solid #cbd5e1;
            border-radius: 999px;
        }}
        .cta {{
            background: #4f46e5;
            color: white;
            padding: 0.5rem 1rem;
            border-radius: 8px;
            font-weight: 600;
        }}
        nav {{
            max-width: 1100px;
            margin: 0.75rem auto 0;
            display: flex;
            gap: 1rem;
            flex-wrap: wrap;
            font-size: 0.9rem;
        }}
        main {{ max-width: 1100px; margin: 0 auto; padding: 2rem; }}
        .hero {{ text-align: center; padding: 3rem 1rem; }}
        .hero h1 {{ font-size: 2.5rem; margin-bottom: 0.5rem; }}
        .hero p {{ color: #64748b; font-size: 1.2rem; }}
        h2 {{ font-size: 1.6rem; margin: 2rem 0 1rem; }}
        .subtitle {{ color: #64748b; margin-top: -0.75rem; margin-bottom: 1rem; }}
        .categories {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
            gap: 1rem;
        }}
        .category {{
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 12px;
            padding: 1rem;
            font-weight: 600;
        }}
        .category span {{ display: block; color: #94a3b8; font-weight: 400; font-size: 0.85rem; }}
        .cards {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.5rem;
        }}
        .card {{
            background: white;
            border-radius: 12px;
            overflow: hidden;
            box-shadow: 0 2px 8px rgba(0,0,0,0.06);
        }}
        .card img {{ width: 100%; height: 170px; object-fit: cover; display: block; }}
        .card .body {{ padding: 1rem; }}
        .card h3 {{ font-size: 1.1rem; margin: 0.25rem 0 0.5rem; }}
        .meta {{ color: #94a3b8; font-size: 0.85rem; }}
        .badge {{
            display: inline-block;
            background: #eef2ff;
            color: #4f46e5;
            padding: 0.1rem 0.6rem;
            border-radius: 999px;
            font-size: 0.75rem;
            font-weight: 700;
        }}
        .badge.ai {{ background: #fdf4ff; color: #a21caf; }}
        .empty {{ text-align: center; padding: 4rem 1rem; color: #64748b; }}
        article.tutorial {{ max-width: 800px; margin: 0 auto; }}
        article.tutorial .cover {{ width: 100%; border-radius: 12px; margin: 1rem 0; }}
        article.tutorial h1 {{ font-size: 2.2rem; line-height: 1.2; }}
        article.tutorial section {{ margin: 2rem 0; }}
        article.tutorial p {{ margin-bottom: 1rem; }}
        .intro {{ font-size: 1.15rem; color: #475569; }}
        ol.steps li {{ margin: 0 0 1rem 1.5rem; }}
        ol.steps strong {{ display: block; }}
        ul.plain li {{ margin: 0 0 0.5rem 1.5rem; }}
        .faq dt {{ font-weight: 700; margin-top: 1rem; }}
        .generator {{ max-width: 700px; margin: 0 auto; text-align: center; }}
        .generator input {{
            width: 100%;
            padding: 1rem;
            font-size: 1.1rem;
            border: 2px solid #c7d2fe;
            border-radius: 12px;
            margin: 1.5rem 0 1rem;
        }}
        .generator button {{
            background: #4f46e5;
            color: white;
            border: none;
            padding: 1rem 2rem;
            font-size: 1.1rem;
            border-radius: 12px;
            cursor: pointer;
        }}
        .error {{
            background: #fef2f2;
            color: #b91c1c;
            border: 1px solid #fecaca;
            padding: 1rem;
            border-radius: 8px;
            margin-top: 1rem;
        }}
        footer {{
            margin-top: 3rem;
            padding: 2rem;
            border-top: 1px solid #e2e8f0;
            color: #94a3b8;
            font-size: 0.9rem;
            text-align: center;
        }}
    </style>
</head>
<body>
    <header>
        <div class="topbar">
            <a class="brand" href="{home}">{site_name}</a>
            {tools}
        </div>
        <nav>
            <a href="{home}">Início</a>
                {nav}
        </nav>
    </header>
    <main>
{body}
    </main>
    <footer>
        {site_name} &bull; {tagline}
    </footer>
</body>
</html>"#,
        title = html_escape(title),
        site_name = html_escape(&site.name),
        tagline = html_escape(&site.tagline),
        home = HOME,
        tools = tools,
        nav = nav,
        body = body,
    )
}

fn article_card(article: &Article) -> String {
    let ai_badge = if article.is_generated {
        r#" <span class="badge ai">IA</span>"#
    } else {
        ""
    };

    format!(
        r#"<a class="card" href="{href}">
            <img src="{image}" alt="{title}" loading="lazy">
            <div class="body">
                <span class="badge">{category}</span>{ai_badge}
                <h3>{title}</h3>
                <p>{excerpt}</p>
                <div class="meta">{time} &bull; {difficulty}</div>
            </div>
        </a>"#,
        href = html_escape(&tutorial_path(&article.id)),
        image = html_escape(&article.image_url),
        title = html_escape(&article.title),
        category = html_escape(&article.category),
        ai_badge = ai_badge,
        excerpt = html_escape(&article.excerpt(EXCERPT_CHARS)),
        time = html_escape(&article.estimated_time),
        difficulty = article.difficulty,
    )
}

fn card_grid<'a>(articles: impl IntoIterator<Item = &'a Article>) -> String {
    let cards: String = articles.into_iter().map(article_card).collect();
    format!(r#"<div class="cards">{}</div>"#, cards)
}

/// Home page: hero, category grid with counts, recently added articles
pub fn render_home<A: Borrow<Article>>(site: &SiteSettings, articles: &[A], mode: RenderMode) -> String {
    let categories: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<a class="category" href="{}">{}<span>{} tutoriais</span></a>"#,
                html_escape(&category_path(c.as_str())),
                html_escape(c.as_str()),
                by_category(articles, c.as_str()).len()
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
            <h1>{name}</h1>
            <p>{tagline}</p>
        </section>
        <h2>Categorias Populares</h2>
        <div class="categories">{categories}</div>
        <h2>Adicionados Recentemente</h2>
        <p class="subtitle">Novos guias para você aprender hoje</p>
        {recent}"#,
        name = html_escape(&site.name),
        tagline = html_escape(&site.tagline),
        categories = categories,
        recent = card_grid(
            recent(articles, site.recent_count)
                .iter()
                .map(Borrow::<Article>::borrow)
        ),
    );

    layout(site, "Início", &body, mode)
}

/// Category listing. An empty list is a normal page, not an error.
pub fn render_category(
    site: &SiteSettings,
    category: &str,
    articles: &[&Article],
    mode: RenderMode,
) -> String {
    let listing = if articles.is_empty() {
        let invite = if mode.is_interactive() {
            format!(r#"<p><a href="{}">Seja o primeiro a criar um!</a></p>"#, GENERATE)
        } else {
            String::new()
        };
        format!(
            r#"<div class="empty"><p>Nenhum tutorial encontrado nesta categoria ainda.</p>{}</div>"#,
            invite
        )
    } else {
        card_grid(articles.iter().copied())
    };

    let body = format!(
        r#"<h2>{}</h2>
        <p class="subtitle">{} tutoriais</p>
        {}"#,
        html_escape(category),
        articles.len(),
        listing
    );

    layout(site, category, &body, mode)
}

/// Search results. Only served live.
pub fn render_search(site: &SiteSettings, query: &str, results: &[&Article]) -> String {
    let listing = if results.is_empty() {
        r#"<div class="empty"><p>Não encontramos nada com esse termo.</p></div>"#.to_string()
    } else {
        card_grid(results.iter().copied())
    };

    let body = format!(
        r#"<h2>Resultados para "{}"</h2>
        <p class="subtitle">{} tutoriais encontrados</p>
        {}"#,
        html_escape(query),
        results.len(),
        listing
    );

    layout(site, "Busca", &body, RenderMode::Interactive)
}

fn bullet_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!(r#"<ul class="plain">{}</ul>"#, items)
}

/// Full tutorial page
pub fn render_article(site: &SiteSettings, article: &Article, mode: RenderMode) -> String {
    let materials = match article.materials.as_deref() {
        Some(materials) if !materials.is_empty() => format!(
            r#"<section><h2>Materiais Necessários</h2>{}</section>"#,
            bullet_list(materials)
        ),
        _ => String::new(),
    };

    let steps: String = article
        .steps
        .iter()
        .map(|step| {
            format!(
                "<li><strong>{}</strong>{}</li>",
                html_escape(&step.title),
                html_escape(&step.description)
            )
        })
        .collect();

    let faq = if article.faq.is_empty() {
        String::new()
    } else {
        let entries: String = article
            .faq
            .iter()
            .map(|item| {
                format!(
                    "<dt>{}</dt><dd>{}</dd>",
                    html_escape(&item.question),
                    html_escape(&item.answer)
                )
            })
            .collect();
        format!(
            r#"<section class="faq"><h2>Perguntas Frequentes</h2><dl>{}</dl></section>"#,
            entries
        )
    };

    let references = if article.references.is_empty() {
        String::new()
    } else {
        let links: String = article
            .references
            .iter()
            .map(|r| {
                format!(
                    r#"<li><a href="{}" rel="noopener nofollow" target="_blank">{}</a></li>"#,
                    html_escape(&r.url),
                    html_escape(&r.title)
                )
            })
            .collect();
        format!(
            r#"<section><h2>Referências &amp; Leitura Adicional</h2><ul class="plain">{}</ul></section>"#,
            links
        )
    };

    let ai_badge = if article.is_generated {
        r#" <span class="badge ai">Gerado por IA</span>"#
    } else {
        ""
    };

    let body = format!(
        r#"<article class="tutorial">
            <p><a href="{category_href}">&larr; {category}</a></p>
            <span class="badge">{category}</span>{ai_badge}
            <h1>{title}</h1>
            <div class="meta">{time} &bull; {difficulty} &bull; {date}</div>
            <img class="cover" src="{image}" alt="{title}">
            <p class="intro">{introduction}</p>
            <section class="context">{context}</section>
            {materials}
            <section><h2>Passo a Passo</h2><ol class="steps">{steps}</ol></section>
            <section><h2>Dicas de Mestre</h2>{tips}</section>
            <section><h2>Erros Comuns</h2>{common_errors}</section>
            <section><h2>Conclusão</h2><p>{conclusion}</p></section>
            {faq}
            {references}
        </article>"#,
        category_href = html_escape(&category_path(&article.category)),
        category = html_escape(&article.category),
        ai_badge = ai_badge,
        title = html_escape(&article.title),
        time = html_escape(&article.estimated_time),
        difficulty = article.difficulty,
        date = article.created_at.format("%d/%m/%Y"),
        image = html_escape(&article.image_url),
        introduction = html_escape(&article.introduction),
        context = render_context(article),
        materials = materials,
        steps = steps,
        tips = bullet_list(&article.tips),
        common_errors = bullet_list(&article.common_errors),
        conclusion = html_escape(&article.conclusion),
        faq = faq,
        references = references,
    );

    layout(site, &article.title, &body, mode)
}

/// Generation form, optionally with an error notice and the previous topic
pub fn render_generate_form(site: &SiteSettings, topic: &str, error: Option<&str>) -> String {
    let notice = error
        .map(|message| format!(r#"<div class="error">{}</div>"#, html_escape(message)))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="generator">
            <h2>Gerador de Tutoriais IA</h2>
            <p>Gera um guia completo de +1000 palavras em segundos.
            Inclui lista de materiais, passo a passo e dicas de mestre.</p>
            <form action="{action}" method="post">
                <input type="text" name="topic" value="{topic}" required
                    placeholder="Ex: Como fazer sushi em casa, Como consertar ventilador...">
                <button type="submit">Gerar Tutorial Agora</button>
            </form>
            {notice}
        </section>"#,
        action = GENERATE,
        topic = html_escape(topic),
        notice = notice,
    );

    layout(site, "Gerador de Tutoriais IA", &body, RenderMode::Interactive)
}

pub fn render_not_found(site: &SiteSettings, mode: RenderMode) -> String {
    let body = format!(
        r#"<div class="empty">
            <p>Artigo não encontrado.</p>
            <p><a href="{}">&larr; Voltar para Home</a></p>
        </div>"#,
        HOME
    );
    layout(site, "Artigo não encontrado", &body, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use saber_tudo_core::{Config, Difficulty, Step};

    fn site() -> SiteSettings {
        Config::default().site
    }

    fn article(id: &str, category: &str, generated: bool) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Tutorial {}", id),
            category: category.to_string(),
            image_url: "https://loremflickr.com/800/400/x?lock=1".to_string(),
            estimated_time: "20 min".to_string(),
            difficulty: Difficulty::Easy,
            introduction: "Introdução curta.".to_string(),
            context: "<h3>Base</h3><p>Texto.</p>".to_string(),
            materials: None,
            steps: vec![Step {
                title: "Começar".to_string(),
                description: "Faça isto.".to_string(),
            }],
            tips: vec![],
            common_errors: vec![],
            faq: vec![],
            references: vec![],
            conclusion: "Fim.".to_string(),
            created_at: Utc::now(),
            is_generated: generated,
        }
    }

    #[test]
    fn test_html_escape_basic_characters() {
        assert_eq!(html_escape("Hello World"), "Hello World");
        assert_eq!(html_escape("Test & Test"), "Test &amp; Test");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#x27;single&#x27;");
    }

    #[test]
    fn test_html_escape_xss_attempts() {
        assert_eq!(
            html_escape("<script>alert('XSS')</script>"),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
        );

        assert_eq!(
            html_escape("\"><script>alert(document.cookie)</script>"),
            "&quot;&gt;&lt;script&gt;alert(document.cookie)&lt;/script&gt;"
        );

        assert_eq!(
            html_escape("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    #[test]
    fn test_html_escape_unicode() {
        // Unicode should pass through unchanged
        assert_eq!(html_escape("Casa e Organização"), "Casa e Organização");
        assert_eq!(html_escape("pão"), "pão");
    }

    #[test]
    fn test_builtin_context_is_trusted() {
        let a = article("100", "Cozinha", false);
        assert_eq!(render_context(&a), "<h3>Base</h3><p>Texto.</p>");
    }

    #[test]
    fn test_generated_context_is_escaped_into_paragraphs() {
        let mut a = article("gen-1", "Cozinha", true);
        a.context = "Primeiro <b>parágrafo</b>.\n\n\n\nSegundo.\n".to_string();
        assert_eq!(
            render_context(&a),
            "<p>Primeiro &lt;b&gt;parágrafo&lt;/b&gt;.</p>\n<p>Segundo.</p>"
        );
    }

    #[test]
    fn test_home_lists_categories_and_recent() {
        let articles: Vec<Article> = (0..12)
            .map(|i| article(&(100 + i).to_string(), "Cozinha", false))
            .collect();
        let html = render_home(&site(), &articles, RenderMode::Interactive);

        assert!(html.contains("Categorias Populares"));
        assert!(html.contains("12 tutoriais"));
        assert!(html.contains("/categoria/Casa%20e%20Organiza%C3%A7%C3%A3o"));
        // recent_count defaults to 9
        assert!(html.contains("/tutorial/108"));
        assert!(!html.contains("/tutorial/109"));
    }

    #[test]
    fn test_empty_category_invites_generation_only_when_live() {
        let live = render_category(&site(), "Jardinagem", &[], RenderMode::Interactive);
        assert!(live.contains("Nenhum tutorial encontrado nesta categoria ainda."));
        assert!(live.contains("Seja o primeiro a criar um!"));

        let exported = render_category(&site(), "Jardinagem", &[], RenderMode::Static);
        assert!(exported.contains("Nenhum tutorial encontrado nesta categoria ainda."));
        assert!(!exported.contains("/gerar"));
        assert!(!exported.contains("/busca"));
    }

    #[test]
    fn test_article_page_sections() {
        let mut a = article("7", "Tecnologia", true);
        a.title = "<Hack>".to_string();
        let html = render_article(&site(), &a, RenderMode::Interactive);

        assert!(html.contains("&lt;Hack&gt;"));
        assert!(!html.contains("<Hack>"));
        assert!(html.contains("Passo a Passo"));
        assert!(html.contains("Gerado por IA"));
        // no materials, faq or references on this article
        assert!(!html.contains("Materiais Necessários"));
        assert!(!html.contains("Perguntas Frequentes"));
        assert!(!html.contains("Leitura Adicional"));
    }

    #[test]
    fn test_article_page_materials_when_present() {
        let mut a = article("8", "DIY e Artesanato", false);
        a.materials = Some(vec!["Cola".to_string()]);
        let html = render_article(&site(), &a, RenderMode::Static);
        assert!(html.contains("Materiais Necessários"));
        assert!(html.contains("<li>Cola</li>"));
    }

    #[test]
    fn test_generate_form_shows_notice_and_keeps_topic() {
        let html = render_generate_form(&site(), "sushi \"caseiro\"", Some("Erro"));
        assert!(html.contains(r#"value="sushi &quot;caseiro&quot;""#));
        assert!(html.contains(r#"<div class="error">Erro</div>"#));
    }

    #[test]
    fn test_search_page_escapes_query() {
        let html = render_search(&site(), "<x>", &[]);
        assert!(html.contains("Resultados para \"&lt;x&gt;\""));
        assert!(html.contains("Não encontramos nada com esse termo."));
    }
}
