//! Title lists the corpus is expanded from, one list per category.

use saber_tudo_core::Category;

pub const KITCHEN_TITLES: &[&str] = &[
    "Bolo de Cenoura com Chocolate",
    "Lasanha à Bolonhesa Clássica",
    "Risoto de Cogumelos Cremoso",
    "Estrogonofe de Frango Simples",
    "Pudim de Leite Condensado",
    "Feijoada Completa Light",
    "Moqueca de Peixe Baiana",
    "Pão de Queijo Mineiro",
    "Brigadeiro Gourmet de Colher",
    "Coxinha de Frango Crocante",
    "Escondidinho de Carne Seca",
    "Tapioca Recheada de Queijo",
    "Suco Detox Verde Refrescante",
    "Hambúrguer Artesanal Suculento",
    "Batata Frita Crocante e Sequinha",
    "Mousse de Maracujá Rápido",
    "Pizza Caseira de Liquidificador",
    "Salada Caesar Clássica",
    "Panqueca Americana Fofinha",
    "Brownie de Chocolate Molhadinho",
    "Mousse de Chocolate Aerado",
    "Bolo de Fubá Cremoso",
    "Carne de Panela com Batatas",
    "Feijão Tropeiro Tradicional",
    "Arroz de Forno Simples",
    "Salpicão de Frango",
    "Torta de Limão Clássica",
    "Pavê de Chocolate Simples",
    "Macarrão à Carbonara",
    "Peixe Assado no Forno",
    "Purê de Batata Aveludado",
    "Bife à Parmegiana",
    "Sopa de Legumes Nutritiva",
    "Panqueca de Carne Moída",
    "Bolo de Milho Verde",
    "Quiche de Lorraine",
    "Brigadeiro de Paçoca",
    "Cuscuz Paulista",
    "Vaca Atolada Mineira",
    "Bobó de Camarão",
    "Canjica Cremosa",
    "Pão Caseiro Fofinho",
    "Molho de Tomate Caseiro",
    "Hambúrguer de Grão de Bico",
    "Kibe de Forno Recheado",
    "Batata Gratinada",
    "Ceviche de Tilápia",
    "Brownie de Caneca",
    "Chocolate Quente Cremoso",
    "Pudim de Pão Velho",
];

pub const HOME_TITLES: &[&str] = &[
    "Como Organizar o Guarda-Roupa",
    "Limpeza de Vidros Sem Manchas",
    "Horta em Apartamento Pequeno",
    "Organização Eficiente da Despensa",
    "Como Limpar o Sofá em Casa",
    "Decoração Minimalista para Sala",
    "Dobra Perfeita de Lençol de Elástico",
    "Cronograma de Limpeza Semanal",
    "Como Tirar Mofo da Parede",
    "Organizando a Geladeira Corretamente",
    "Como Lavar Roupas Delicadas",
    "Manutenção Básica de Ar Condicionado",
    "Como Escolher Tapetes para Sala",
    "Iluminação para Ambientes Pequenos",
    "Feng Shui para Iniciantes",
    "Como Fazer Vela Aromática",
    "Organizando Brinquedos das Crianças",
    "Limpeza de Rejunte de Azulejo",
    "Dicas para Economizar Água",
    "Check-list de Mudança de Casa",
    "Limpar Box de Banheiro",
    "Organizar Armário de Potes",
    "Como Limpar Prata",
    "Tirar Mancha de Vinho",
    "Organizar Documentos Pessoais",
    "Limpeza de Tapete a Seco",
    "Como Limpar Microondas",
    "Organizar Gaveta de Talheres",
    "Limpar Tela de TV",
    "Tirar Cheiro de Mofo",
    "Como Dobrar Toalhas",
    "Limpar Vidro de Janela",
    "Organizar Maquiagem",
    "Limpar Colchão",
    "Como Lavar Tênis",
    "Organizar Cabos e Fios",
    "Limpar Fogão Inox",
    "Tirar Mancha de Café",
    "Organizar Livros",
    "Limpar Ventilador",
    "Como Lavar Cortinas",
    "Organizar Sapatos",
    "Limpar Máquina de Lavar",
    "Tirar Chiclete de Roupa",
    "Organizar Brinquedoteca",
    "Limpar Persianas",
    "Como Lavar Travesseiro",
    "Organizar Bijuterias",
    "Limpar Chão de Madeira",
    "Tirar Mancha de Caneta",
];

pub const TECH_TITLES: &[&str] = &[
    "Como Formatar o Windows 10/11",
    "Limpar Cache do Celular Android",
    "Criando uma Senha Indecifrável",
    "Melhorar o Sinal do Wi-Fi em Casa",
    "Backup Automático no Google Photos",
    "Truques do Excel para Iniciantes",
    "Como Editar Vídeos no Celular",
    "Instalando um SSD no Notebook",
    "Protegendo seu WhatsApp de Clonagem",
    "Usando o ChatGPT para Estudos",
    "Configurar Impressora Wi-Fi",
    "Bloquear Spam e Email Indesejado",
    "Atalhos de Teclado para Produtividade",
    "Recuperar Arquivos Deletados",
    "Criar um Site Grátis Rapidamente",
    "Calibrar Bateria do Notebook",
    "Transferir Dados de Android para iPhone",
    "Como Usar o Canva para Design",
    "Entendendo Criptomoedas (Básico)",
    "Como Limpar o Teclado do Notebook",
    "Atalhos do Windows Que Você Não Sabia",
    "Melhores Extensões para Chrome",
    "Como Criar um Email Profissional",
    "Dicas de Segurança no Instagram",
    "Como Usar o Google Drive",
    "Converter PDF para Word",
    "Como Gravar a Tela do PC",
    "Melhorar o Desempenho do PC",
    "Como Escolher um Notebook",
    "Dicas para Comprar Celular Usado",
    "Como Usar o Google Maps Offline",
    "Criar Senhas Fortes",
    "Como Identificar Fake News",
    "Usar o Celular como Webcam",
    "Como Baixar Vídeos do YouTube",
    "Dicas de Fotografia com Celular",
    "Como Configurar Roteador",
    "Entendendo a Nuvem",
    "Como Recuperar Senha do Gmail",
    "Dicas de LinkedIn",
    "Como Fazer um Podcast",
    "Usar o Trello para Organização",
    "Como Editar PDF Grátis",
    "Dicas de Zoom para Reuniões",
    "Como Funciona o Bluetooth",
    "Limpar Memória do iPhone",
    "Como Bloquear Sites no PC",
    "Dicas de Excel Avançado",
    "Como Criar um Blog",
];

pub const DIY_TITLES: &[&str] = &[
    "Como Fazer Sabonete Artesanal",
    "Pintura em Vasos de Cerâmica",
    "Macramê para Suporte de Plantas",
    "Restaurar Móveis de Madeira Antigos",
    "Técnica Tie-Dye em Camisetas",
    "Criando Quadros Decorativos",
    "Tricô: Pontos Básicos para Iniciar",
    "Origami de Tsuru Passo a Passo",
    "Como Fazer Slime Caseiro Seguro",
    "Encadernação Manual Simples",
    "Bijuterias de Miçangas da Moda",
    "Pintura em Tecido para Iniciantes",
    "Como Montar um Terrário Fechado",
    "Bordado Livre: Primeiros Passos",
    "Flores de Papel para Decoração",
    "Customização de Jeans Velho",
    "Como Fazer um Scrapbook de Viagem",
    "Decoupage em Caixas de MDF",
    "Amigurumi: O Círculo Mágico",
    "Montar Cesta de Café da Manhã",
    "Vaso de Cimento Caseiro",
    "Porta-Treco de Garrafa PET",
    "Caderno Customizado",
    "Marca Página de Papel",
    "Pote de Vidro Decorado",
    "Chaveiro de Feltro",
    "Bastidor Bordado",
    "Ecobag Personalizada",
    "Porta-Joias de Caixa de Leite",
    "Móbile para Berço",
    "Luminária de Barbante",
    "Tapete de Retalhos",
    "Almofada sem Costura",
    "Organizador de Mesa de Papelão",
    "Suporte para Celular de Madeira",
    "Vela Perfumada em Pote",
    "Sabonete Líquido Caseiro",
    "Aromatizador de Ambiente",
    "Enfeite de Natal Reciclado",
    "Cesta de Jornal",
    "Pintura em Pedras",
    "Imã de Geladeira Artesanal",
    "Porta-Copos de Cortiça",
    "Quadrinho de Bastidor",
    "Filtro dos Sonhos Simples",
    "Bolsa de Crochê",
    "Cachecol de Tricô Iniciante",
    "Pulseira de Macramê",
    "Brinco de Biscuit",
    "Tiaras Decoradas",
];

pub const FINANCE_TITLES: &[&str] = &[
    "Criando uma Planilha de Gastos",
    "Saindo das Dívidas em 5 Passos",
    "O que é Tesouro Direto?",
    "Economizando no Supermercado",
    "Calculando a Reserva de Emergência",
    "Cartão de Crédito: Use a Seu Favor",
    "Declarar Imposto de Renda (Guia)",
    "Investindo em Fundos Imobiliários",
    "Negociar Dívidas com o Banco",
    "Previdência Privada Vale a Pena?",
    "Ensinando Finanças para Crianças",
    "Reduzindo a Conta de Luz",
    "Entendendo o Score de Crédito",
    "Planejamento Financeiro para Casais",
    "Juntar Dinheiro para Viajar",
    "Diferença entre CDB, LCI e LCA",
    "Comprar Carro: Financiamento ou Consórcio?",
    "Regra 50-30-20 para Orçamento",
    "Como Pedir Aumento de Salário",
    "Ideias de Renda Extra Rápida",
    "Como Começar a Investir com Pouco",
    "O que é Selic e IPCA",
    "Como Funciona o Fundo de Garantia",
    "Dicas para Negociar Dívidas",
    "Planejamento para Aposentadoria",
    "Como Economizar na Gasolina",
    "O que são Dividendos",
    "Como Declarar Bitcoin",
    "Diferença entre Débito e Crédito",
    "Como Fazer um Orçamento Familiar",
    "Dicas para Comprar Casa Própria",
    "Vale a Pena Alugar Carro?",
    "Como Funciona o Seguro de Vida",
    "Economia Doméstica Prática",
    "Como Evitar Compras por Impulso",
    "O que é Reserva de Oportunidade",
    "Como Ganhar Dinheiro na Internet",
    "Investir em Ações para Iniciantes",
    "Como Funciona o Tesouro Direto",
    "Dicas para Freelancers",
    "Como Cobrar pelo seu Trabalho",
    "Educação Financeira Infantil",
    "Como Sair do Vermelho",
    "O que é CDI",
    "Como Escolher um Banco Digital",
    "Vantagens do PIX",
    "Como se Proteger de Golpes Financeiros",
    "Planejamento para Casamento",
    "Como Juntar para a Faculdade",
    "Dicas de Consumo Consciente",
];

pub const SELF_CARE_TITLES: &[&str] = &[
    "Skincare Básico para Pele Oleosa",
    "Meditação Mindfulness para Iniciantes",
    "Hidratação Caseira Potente",
    "Fazendo as Unhas em Casa (Manicure)",
    "Rotina Matinal para Produtividade",
    "Higiene do Sono: Durma Melhor",
    "Alongamento para Quem Trabalha Sentado",
    "Cronograma Capilar Completo",
    "Automassagem para Aliviar Tensão",
    "Escolhendo o Protetor Solar Ideal",
    "Estratégias para Beber Mais Água",
    "Esfoliante Caseiro Natural",
    "Maquiagem Leve para o Dia a Dia",
    "Lidando com a Ansiedade Leve",
    "Benefícios da Ioga Diária",
    "Cuidados Básicos com a Barba",
    "Banho Relaxante com Sais",
    "Diminuindo o Consumo de Açúcar",
    "Postura Correta ao Computador",
    "Guia para Começar a Correr",
    "Benefícios da Água com Limão",
    "Como Começar a Meditar",
    "Exercícios de Respiração",
    "Dicas para Dormir Melhor",
    "Como Lidar com o Estresse",
    "Benefícios da Caminhada",
    "Receitas de Sucos Detox",
    "Como Cuidar da Pele no Inverno",
    "Dicas para Cabelos Cacheados",
    "Como Fazer Cronograma Capilar",
    "Benefícios do Chá Verde",
    "Como Parar de Roer Unhas",
    "Dicas de Postura no Trabalho",
    "Alongamento Matinal",
    "Como Escolher um Perfume",
    "Benefícios da Leitura",
    "Como Ter Mais Foco",
    "Dicas de Produtividade",
    "Como Dizer Não",
    "Benefícios do Gratidão",
    "Como Organizar a Rotina",
    "Dicas de Alimentação Saudável",
    "Como Fazer Jejum Intermitente",
    "Benefícios do Óleo de Coco",
    "Como Cuidar das Unhas",
    "Dicas de Maquiagem para Noite",
    "Como Usar Óleos Essenciais",
    "Benefícios da Argila na Pele",
    "Como Fazer Spa dos Pés",
    "Dicas para Relaxar a Mente",
];

pub const TOOLS_TITLES: &[&str] = &[
    "Usando a Furadeira Sem Medo",
    "Trocar Resistência do Chuveiro",
    "Kit de Ferramentas Essencial",
    "Desentupir Pia de Cozinha Fácil",
    "Trocar Tomada Elétrica com Segurança",
    "Usando Multímetro (Básico)",
    "Como Amolar Facas em Casa",
    "Reparar Furos na Parede com Massa",
    "Trocar o Botijão de Gás Corretamente",
    "5 Nós de Marinheiro Úteis",
    "Usando Nível de Mão para Quadros",
    "Tirar Parafuso Espanado ou Enferrujado",
    "Cortar Vidro: Técnica Básica",
    "Colar Madeira Quebrada",
    "Instalar Prateleira Nivelada",
    "Trocar Fechadura de Porta",
    "Usando a Serra Tico-Tico",
    "Lubrificar Dobradiças que Rangem",
    "Pintar Parede com Rolo Sem Manchas",
    "Identificar Vazamentos de Água",
    "Como Usar uma Lixadeira",
    "Tipos de Parafusos e Buchas",
    "Como Trocar o Pneu do Carro",
    "Verificar Óleo do Motor",
    "Como Usar uma Chave de Grifo",
    "Tipos de Alicates",
    "Como Cortar Piso Cerâmico",
    "Como Instalar um Ventilador de Teto",
    "Como Limpar Ferramentas Enferrujadas",
    "Como Organizar uma Oficina",
    "Como Usar uma Serra Circular",
    "Como Soldar Fios",
    "Como Trocar a Resistência do Chuveiro",
    "Como Instalar uma Torneira",
    "Como Desentupir Vaso Sanitário",
    "Como Trocar o Disjuntor",
    "Como Instalar uma Luminária",
    "Como Usar uma Trena",
    "Como Cortar Madeira no Esquadro",
    "Como Pintar Metais",
    "Como Usar Cola de Contato",
    "Como Fixar Objetos na Parede",
    "Como Usar Furadeira de Impacto",
    "Como Trocar a Lâmpada do Carro",
    "Como Calibrar Pneus",
    "Como Verificar a Água do Radiador",
    "Como Trocar a Palheta do Limpador",
    "Como Polir o Carro em Casa",
    "Como Tirar Riscos da Pintura",
    "Como Limpar o Ar Condicionado do Carro",
];

pub const GARDENING_TITLES: &[&str] = &[
    "Como Plantar Tomates em Vaso",
    "Cultivo de Suculentas para Iniciantes",
    "Horta Vertical em Apartamento",
    "Como Fazer Compostagem Caseira",
    "Cuidando de Orquídeas: Guia Básico",
    "Plantas que Limpam o Ar da Casa",
    "Como Podar Roseiras Corretamente",
    "Germinando Sementes de Limão",
    "Sistema de Irrigação por Gotejamento",
    "Como Eliminar Cochonilhas Naturalmente",
    "Adubo Orgânico com Casca de Ovo",
    "Cultivando Temperos na Cozinha",
    "Como Plantar Batata Doce em Casa",
    "Flores que Aguentam Sol Pleno",
    "Jardim de Inverno: Como Montar",
    "Propagação de Plantas por Estaca",
    "Cuidando do Gramado: Corte e Rega",
    "Como Plantar Morangos Suspensos",
    "Plantas Medicinais para Ter em Casa",
    "Terrário Aberto Passo a Passo",
    "Como Cuidar de Samambaias",
    "Como Plantar Alface em Vaso",
    "Dicas para Cultivar Manjericão",
    "Como Fazer Mudas de Plantas",
    "Como Eliminar Pulgões",
    "Como Cuidar de Cactos",
    "Como Plantar Girassol",
    "Como Fazer uma Horta Suspensa",
    "Dicas para Regar Plantas",
    "Como Escolher o Vaso Ideal",
    "Como Preparar a Terra para Plantar",
    "Como Podar Árvores Frutíferas",
    "Como Plantar Cenoura em Vaso",
    "Dicas para Cultivar Hortelã",
    "Como Cuidar de Violetas",
    "Como Plantar Pimentão",
    "Como Fazer Adubo Líquido",
    "Como Cuidar de Bonsai",
    "Como Plantar Morango",
    "Dicas para Cultivar Alecrim",
    "Como Eliminar Formigas da Horta",
    "Como Plantar Abobrinha",
    "Como Cuidar de Orquídeas no Inverno",
    "Como Plantar Cebolinha",
    "Dicas para Cultivar Coentro",
    "Como Fazer Estufa Caseira",
    "Como Plantar Beterraba",
    "Como Cuidar de Espada de São Jorge",
    "Como Plantar Rúcula",
    "Dicas para Cultivar Salsa",
];

/// Ordered titles configured for a category
pub fn titles_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Kitchen => KITCHEN_TITLES,
        Category::Home => HOME_TITLES,
        Category::Tech => TECH_TITLES,
        Category::Diy => DIY_TITLES,
        Category::Finance => FINANCE_TITLES,
        Category::SelfCare => SELF_CARE_TITLES,
        Category::Tools => TOOLS_TITLES,
        Category::Gardening => GARDENING_TITLES,
    }
}

/// Total number of catalog titles across all categories
pub fn title_count() -> usize {
    Category::ALL.iter().map(|c| titles_for(*c).len()).sum()
}
