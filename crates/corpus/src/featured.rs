//! Hand-authored articles shown ahead of the generated corpus.

use chrono::{DateTime, NaiveDate, Utc};
use saber_tudo_core::images::placeholder_image_url;
use saber_tudo_core::{Article, Category, Difficulty, FaqItem, ReferenceLink, Step};

/// Featured ids live below this value; corpus ids start here.
pub const FEATURED_ID_CEILING: u32 = 100;

fn published(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn step(title: &str, description: &str) -> Step {
    Step {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn reference(title: &str, url: &str) -> ReferenceLink {
    ReferenceLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

fn homemade_bread(image_host: &str) -> Article {
    Article {
        id: "1".to_string(),
        title: "Como Fazer Pão Caseiro Perfeito".to_string(),
        category: Category::Kitchen.as_str().to_string(),
        image_url: placeholder_image_url(image_host, "bread,baking", None),
        estimated_time: "3 horas".to_string(),
        difficulty: Difficulty::Medium,
        introduction: "Fazer pão em casa é uma arte terapêutica e deliciosa. Neste guia, você aprenderá a técnica básica para um pão rústico, crocante por fora e macio por dentro.".to_string(),
        context: r#"<h3>A História do Pão</h3>
<p>O pão é um dos alimentos mais antigos da humanidade, datando de mais de 10.000 anos. Símbolo de vida e sustento, ele evoluiu de massas simples cozidas em pedras quentes para as complexas fermentações naturais que vemos hoje.</p>
<p>A magia acontece graças ao glúten e às leveduras. Quando misturamos farinha e água, as proteínas do trigo formam uma rede elástica (glúten). As leveduras consomem os açúcares naturais e liberam gás carbônico, que fica preso nessa rede, fazendo a massa crescer. Entender esse processo químico é a chave para o pão perfeito.</p>
<p>Neste guia, não usaremos atalhos industriais. Vamos focar na fermentação lenta, que desenvolve sabores complexos e facilita a digestão. Prepare-se para perfumar sua casa inteira com o cheiro inconfundível de pão fresco.</p>"#
            .to_string(),
        materials: Some(strings(&[
            "500g de farinha de trigo (preferência tipo 1 ou especial)",
            "350ml de água morna (filtrada)",
            "10g de fermento biológico seco instantâneo",
            "10g de sal refinado",
        ])),
        steps: vec![
            step(
                "Ativar o Fermento",
                "Misture o fermento na água morna e deixe descansar por 5 minutos até espumar. Isso garante que as leveduras estão vivas.",
            ),
            step(
                "Misturar Ingredientes",
                "Em uma tigela grande, misture a farinha e o sal. Adicione a água com fermento aos poucos, mexendo com uma colher de pau até formar uma massa rústica.",
            ),
            step(
                "Sova da Massa",
                "Transfira para uma bancada enfarinhada. Sove vigorosamente por 10 a 15 minutos. A massa deve ficar lisa, elástica e desgrudar das mãos (ponto de véu).",
            ),
            step(
                "Primeira Fermentação",
                "Coloque a massa em uma tigela untada com azeite, cubra com um pano úmido e deixe descansar em local morno por 1 hora ou até dobrar de tamanho.",
            ),
            step(
                "Modelagem e Segunda Fermentação",
                "Retire o ar da massa suavemente, modele no formato desejado (bola ou filão) e deixe crescer por mais 40 minutos na assadeira.",
            ),
            step(
                "Assar com Vapor",
                "Faça cortes na superfície com uma lâmina afiada. Borrife água no forno pré-aquecido a 220°C para criar vapor (ajuda na crosta) e asse por 30-40 minutos até dourar bem.",
            ),
        ],
        tips: strings(&[
            "Use farinha de boa qualidade com alto teor de proteína.",
            "Não use água acima de 40°C ou matará o fermento.",
        ]),
        common_errors: strings(&[
            "Cortar o pão ainda quente (o miolo fica gomoso).",
            "Pouca sova (o pão fica denso e pesado).",
        ]),
        faq: vec![
            faq(
                "Posso usar farinha integral?",
                "Sim, mas o pão ficará mais denso. Recomendamos usar 50% integral e 50% branca para começar.",
            ),
            faq(
                "Por que meu pão não cresceu?",
                "Provavelmente o fermento estava velho ou a água estava muito quente. Verifique a validade.",
            ),
        ],
        references: vec![
            reference(
                "História do Pão - Wikipedia",
                "https://pt.wikipedia.org/wiki/P%C3%A3o",
            ),
            reference("Tudo sobre Fermentação Natural", "https://www.google.com"),
        ],
        conclusion: "Agora você tem um pão fresco, crocante e sem conservantes. Acompanha perfeitamente manteiga, azeite ou sopas.".to_string(),
        created_at: published(2023, 10, 15),
        is_generated: false,
    }
}

/// Featured articles in display order
pub fn featured_articles(image_host: &str) -> Vec<Article> {
    vec![homemade_bread(image_host)]
}
