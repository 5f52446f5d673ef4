//! Canned tutorial prose.
//!
//! Each category maps to a context template; categories without prose of
//! their own use [`DEFAULT_CONTEXT`]. Every `{title}` in a template is
//! replaced with the article title.

use saber_tudo_core::{Category, FaqItem, ReferenceLink, Step};

/// Placeholder substituted with the article title
pub const TITLE_TOKEN: &str = "{title}";

const KITCHEN_CONTEXT: &str = r#"
<h3>A Ciência e a História por trás do Sabor</h3>
<p>Cozinhar não é apenas seguir uma receita; é entender a química dos alimentos e a cultura que os envolve.
Ao preparar <strong>{title}</strong>, estamos participando de uma tradição que pode remontar a séculos.
A gastronomia conecta pessoas, evoca memórias e desperta sentidos. Entender a reação de Maillard ao dourar uma carne,
ou a fermentação do glúten ao fazer um pão, transforma um cozinheiro amador em um mestre da cozinha.</p>
<p>Neste guia completo, não vamos apenas listar ingredientes. Vamos mergulhar nas nuances de sabor, nas substituições inteligentes
e nas técnicas profissionais que elevam este prato simples a uma experiência gastronômica. Prepare-se para aprender sobre a seleção
rigorosa de insumos, o controle preciso de temperatura e a apresentação que encanta os olhos antes mesmo da primeira garfada.</p>
<p>Além disso, é importante ressaltar o aspecto nutricional e a sustentabilidade na cozinha. Escolher ingredientes sazonais e locais
não só melhora o sabor do seu {title}, mas também apoia a economia local e reduz a pegada de carbono. A cozinha moderna é consciente,
eficiente e, acima de tudo, apaixonante.</p>
<p>Ao longo dos próximos parágrafos e instruções, detalharemos cada minúcia. Se você já se perguntou por que seus pratos anteriores
não ficaram como os das fotos de revista, a resposta provavelmente está nos pequenos detalhes que abordaremos a seguir: o tempo de descanso,
a temperatura exata do forno, ou a ordem de mistura dos ingredientes. Vamos começar essa jornada culinária?</p>
"#;

const TECH_CONTEXT: &str = r#"
<h3>Entendendo a Tecnologia a Fundo</h3>
<p>No mundo acelerado da tecnologia, dominar <strong>{title}</strong> é mais do que uma habilidade útil; é uma necessidade para se manter
relevante e seguro digitalmente. A tecnologia evolui exponencialmente, e o que era padrão ontem pode estar obsoleto hoje. Este guia não é apenas
um manual de instruções; é uma imersão nos conceitos fundamentais que regem este dispositivo ou software.</p>
<p>Para compreender verdadeiramente este processo, precisamos olhar para "baixo do capô". Como os dados são processados? Quais são os protocolos
de segurança envolvidos? Ao realizar este procedimento, você está interagindo com camadas complexas de hardware e software que foram desenvolvidas
ao longo de décadas de engenharia. Desmistificar essa complexidade é o nosso objetivo.</p>
<p>Abordaremos também as implicações de privacidade e eficiência. Muitas vezes, usuários realizam tarefas de forma automática sem entender
o impacto no desempenho do sistema ou na segurança de seus dados pessoais. Com as dicas avançadas que preparamos, você não apenas resolverá
seu problema imediato, mas também otimizará todo o seu fluxo de trabalho digital.</p>
"#;

const DIY_CONTEXT: &str = r#"
<h3>A Arte do "Faça Você Mesmo"</h3>
<p>O movimento Maker e a cultura DIY (Do It Yourself) resgatam a autonomia humana de criar, consertar e transformar o mundo ao nosso redor.
Criar <strong>{title}</strong> com suas próprias mãos oferece uma satisfação que nenhum produto comprado em loja pode proporcionar. É sobre
colocar sua energia, sua personalidade e seu tempo em um objeto físico.</p>
<p>Historicamente, o artesanato foi a base da economia humana. Hoje, ele retorna como uma forma de terapia, sustentabilidade e expressão artística.
Ao trabalhar neste projeto, você desenvolverá habilidades motoras finas, paciência e resolução de problemas. Cada erro é uma lição; cada acerto, uma vitória.</p>
<p>Neste dossiê completo, exploraremos não apenas o "como", mas o "porquê". Falaremos sobre a escolha dos materiais: por que usar este tipo de cola
e não aquele? Por que essa madeira é melhor para este acabamento? Entender as propriedades dos materiais é o que separa um projeto amador de uma peça
com acabamento profissional que durará anos.</p>
"#;

const GARDENING_CONTEXT: &str = r#"
<h3>Conectando-se com a Natureza através da Jardinagem</h3>
<p>Cultivar <strong>{title}</strong> é um ato de paciência, esperança e conexão profunda com os ciclos naturais. A jardinagem não é apenas sobre
fazer plantas crescerem; é sobre entender o solo, a luz, a água e a vida microscópica que sustenta tudo isso. Estudos mostram que o contato com a terra
reduz o estresse, melhora a saúde mental e nos ensina a respeitar o tempo das coisas.</p>
<p>Neste guia detalhado, vamos além do básico de "regar e esperar". Você aprenderá sobre o pH do solo ideal, a importância da drenagem, os nutrientes
específicos (NPK) que esta espécie necessita e como prevenir pragas de forma ecológica. O sucesso na jardinagem está na observação e na prevenção.</p>
<p>Seja em um quintal espaçoso ou em um pequeno vaso na varanda de um apartamento, é possível trazer vida para o seu ambiente. Vamos explorar as técnicas
de poda, o momento certo para o transplante e como simular o habitat natural da planta para que ela prospere. Prepare suas ferramentas e vamos sujar as mãos de terra!</p>
"#;

/// Fallback prose for categories without a dedicated template
pub const DEFAULT_CONTEXT: &str = r#"
<h3>Aprofundando seus Conhecimentos</h3>
<p>Aprender sobre <strong>{title}</strong> é um passo importante para sua autonomia e desenvolvimento pessoal.
Muitas vezes, subestimamos a complexidade e a beleza escondida nas tarefas do dia a dia. Este guia foi elaborado
após extensa pesquisa e testes práticos para garantir que você tenha a melhor informação disponível em língua portuguesa.</p>
<p>A metodologia que aplicamos aqui foca na eficiência e na segurança. Analisamos os erros mais comuns cometidos por iniciantes
e criamos barreiras de proteção neste tutorial para garantir que você tenha sucesso na primeira tentativa. O conhecimento compartilhado
aqui é uma síntese de boas práticas, recomendações de especialistas e feedback da nossa comunidade.</p>
<p>Lembre-se: a prática leva à perfeição. Leia todo o conteúdo teórico abaixo antes de colocar a mão na massa.
Entender o contexto geral fará com que cada passo prático faça muito mais sentido, evitando retrabalho e frustração.
Vamos expandir seus horizontes?</p>
"#;

const INTRODUCTION: &str = "Preparar ou fazer {title} é uma jornada fascinante. Neste guia definitivo, cobrimos absolutamente tudo o que você precisa saber.";

const CONCLUSION: &str = "Dominar este processo coloca você em um novo patamar de habilidade. Pratique, compartilhe seu conhecimento e continue aprendendo!";

const MATERIALS: &[&str] = &[
    "Item Essencial 1 de alta qualidade",
    "Ferramenta auxiliar de precisão",
    "Material de consumo básico",
    "Equipamento de proteção individual",
    "Recipiente adequado",
];

const STEPS: &[(&str, &str)] = &[
    (
        "Preparação do Ambiente e Materiais",
        "O sucesso começa antes da execução. Organize seu espaço de trabalho (mise en place), garantindo boa iluminação e ventilação. Verifique se todos os materiais estão à mão para evitar interrupções críticas durante o processo.",
    ),
    (
        "Fundamentos e Configuração Inicial",
        "Comece pelos processos básicos. Se for uma receita, misture os secos. Se for uma construção, lixe a base. Se for tecnologia, faça o backup. Esta etapa cria a fundação sólida necessária para que o resultado final seja estável e duradouro.",
    ),
    (
        "Execução da Técnica Principal",
        "Aqui acontece a mágica. Com movimentos firmes e atenção aos detalhes, aplique a técnica descrita. Observe as mudanças de textura, cor ou comportamento do sistema. Mantenha o foco total nesta etapa, pois ela define 80% da qualidade final.",
    ),
    (
        "Refinamento e Ajustes",
        "Nada sai perfeito de primeira sem ajustes. Verifique a consistência, o nível ou o funcionamento. Faça pequenas correções agora enquanto ainda é possível alterar o resultado. A paciência aqui é sua melhor ferramenta.",
    ),
    (
        "Finalização e Acabamento",
        "O toque final. Limpe as bordas, decore, ou reinicie o sistema para aplicar as mudanças. Apresente seu trabalho com orgulho. O acabamento mostra o cuidado e o carinho que você dedicou ao projeto.",
    ),
];

const TIPS: &[&str] = &[
    "A qualidade dos materiais define 50% do resultado.",
    "Nunca pule a etapa de preparação.",
    "Documente seu processo com fotos para aprender depois.",
    "Se tiver dúvida, pare e releia as instruções.",
];

const COMMON_ERRORS: &[&str] = &[
    "Pressa na execução das etapas iniciais.",
    "Uso de ferramentas inadequadas ou improvisadas.",
    "Ignorar as medidas de segurança recomendadas.",
    "Não ler o manual ou guia até o fim antes de começar.",
];

const FAQ: &[(&str, &str)] = &[
    (
        "Isso é seguro para iniciantes?",
        "Sim! Este guia foi desenhado especificamente para quem está começando, com todos os avisos de segurança necessários.",
    ),
    (
        "Quanto tempo leva para dominar isso?",
        "Embora o tutorial possa ser feito no tempo estimado, a maestria completa vem com a repetição e prática constante.",
    ),
    (
        "Posso substituir os materiais?",
        "Alguns materiais são substituíveis, veja nossa seção de 'Dicas' para alternativas viáveis que não comprometem o resultado.",
    ),
    (
        "Onde encontro os itens necessários?",
        "A maioria pode ser encontrada em lojas especializadas do ramo ou grandes varejistas online. Recomendamos sempre pesquisar preços.",
    ),
];

const REFERENCES: &[(&str, &str)] = &[
    ("Wikipédia - História do tema", "https://pt.wikipedia.org"),
    ("Canal do Youtube Recomendado", "https://youtube.com"),
    ("Fórum de Discussão Especializado", "https://reddit.com"),
];

/// Narrative payload for one corpus article
#[derive(Debug, Clone)]
pub struct TutorialContent {
    pub introduction: String,
    pub context: String,
    pub materials: Vec<String>,
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
    pub common_errors: Vec<String>,
    pub faq: Vec<FaqItem>,
    pub references: Vec<ReferenceLink>,
    pub conclusion: String,
}

/// Context template designated for a category
pub fn context_template(category: Category) -> &'static str {
    match category {
        Category::Kitchen => KITCHEN_CONTEXT,
        Category::Tech => TECH_CONTEXT,
        Category::Diy => DIY_CONTEXT,
        Category::Gardening => GARDENING_CONTEXT,
        Category::Home | Category::Finance | Category::SelfCare | Category::Tools => {
            DEFAULT_CONTEXT
        }
    }
}

/// Substitute every title token in `template`
pub fn render(template: &str, title: &str) -> String {
    template.replace(TITLE_TOKEN, title)
}

pub fn content_for(category: Category, title: &str) -> TutorialContent {
    TutorialContent {
        introduction: render(INTRODUCTION, title),
        context: render(context_template(category), title).trim().to_string(),
        materials: to_strings(MATERIALS),
        steps: STEPS
            .iter()
            .map(|(title, description)| Step {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        tips: to_strings(TIPS),
        common_errors: to_strings(COMMON_ERRORS),
        faq: FAQ
            .iter()
            .map(|(question, answer)| FaqItem {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect(),
        references: REFERENCES
            .iter()
            .map(|(title, url)| ReferenceLink {
                title: title.to_string(),
                url: url.to_string(),
            })
            .collect(),
        conclusion: CONCLUSION.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
