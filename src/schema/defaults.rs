/// Built-in lexicon tables.
///
/// Entries may themselves contain placeholders; the generator keeps
/// expanding until none are left.

use super::noun::Gender;

/// Root sentences; each one pulls in a predicate.
pub(crate) const SKELETONS: &[&str] = &[
    "Projeto de lei {predicate}",
    "Senado vota projeto de lei que {predicate}",
    "AGORA É LEI! Senado aprova PL{number,1000,99999,0}, que {predicate}",
];

/// What the bill actually does.
pub(crate) const PREDICATES: &[&str] = &[
    "obriga {subject:plural} a {action:infinitive,person}",
    "proibe {subject:plural} de {action:infinitive,person}",
    "obriga {establishment:plural} a {action:infinitive,establishment}",
    "proibe {establishment:plural} de {action:infinitive,establishment}",
    "proíbe venda de {object:plural} em {establishment:plural}",
    "determina que {subject:plural} devem {action:infinitive,person}",
    "determina que {establishment:plural} devem {action:infinitive,establishment}",
    "estabelece multa de R${number,0,1000,2} para {subject:plural} que {action:plural,person}",
    "estabelece multa de R${number,0,1000,2} para {establishment:plural} que {action:plural,establishment}",
    "prevê o pagamento de auxílio de R${number,0,1000,2} mensais a {subject:plural}",
    "destina {number,1,105,0}% do {resource} para o combate a {problem}",
    "garante a {subject:plural} o direito de {action:infinitive,person}",
    "prevê novo imposto sobre {establishment:plural} que será usado no combate a {problem}",
    "estabelece cota mínima de {number,0.5,55}% para {subject:plural} em concursos públicos",
    "isenta {subject:plural} do imposto de renda",
    "declara {object:plural} como patrimônio cultural imaterial do Brasil",
    "torna obrigatório o uso de {object:plural} em {establishment:plural} durante {disease}",
    "cria o Dia Nacional do {subject:singular}",
    "institui a semana de conscientização sobre {problem}",
    "criminaliza a discriminação contra {subject:plural} em {establishment:plural}",
    "autoriza {subject:plural} a portar {object:plural} para autodefesa",
    "regulamenta a profissão de {subject:singular}",
    "estabelece que {establishment:plural} devem ter banheiros especiais para {subject:plural}",
    "cria voucher de R${number,50,500,2} para {subject:plural} comprarem {object:plural}",
    "proíbe {subject:plural} de frequentar {establishment:plural} em horário comercial",
    "prevê a criação do Conselho Nacional de {subject:plural}",
];

/// People the bill is about, as (singular, plural, gender).
pub(crate) const SUBJECTS: &[(&str, &str, Gender)] = &[
    ("pessoa", "pessoas", Gender::Feminine),
    ("homem", "homens", Gender::Masculine),
    ("mulher", "mulheres", Gender::Feminine),
    ("transexual", "transexuais", Gender::Either),
    ("idoso", "idosos", Gender::Masculine),
    ("criança", "crianças", Gender::Feminine),
    ("adulto", "adultos", Gender::Masculine),
    ("pessoa com mais de {number,2,100,0} anos", "pessoas com mais de {number,2,100,0} anos", Gender::Feminine),
    ("pessoa com menos de {number,2,100,0} anos", "pessoas com menos de {number,2,100,0} anos", Gender::Feminine),
    ("pessoa com renda maior que R${number,1000,50000,2}", "pessoas com renda maior que R${number,1000,50000,2}", Gender::Feminine),
    ("pessoa com renda menor que R${number,1000,50000,2}", "pessoas com renda menor que R${number,1000,50000,2}", Gender::Feminine),
    ("portador de deficiência", "portadores de deficiência", Gender::Masculine),
    ("servidor público", "servidores públicos", Gender::Masculine),
    ("empregador", "empregadores", Gender::Masculine),
    ("empresário", "empresários", Gender::Masculine),
    ("empregado", "empregados", Gender::Masculine),
    ("motorista de aplicativo", "motoristas de aplicativo", Gender::Masculine),
    ("entregador de aplicativo", "entregadores de aplicativo", Gender::Masculine),
    ("dona de casa", "donas de casa", Gender::Feminine),
    ("prostituta", "prostitutas", Gender::Feminine),
    ("pessoa que realizou cirurgia de redução bariátrica", "pessoas que realizaram cirurgia de redução bariátrica", Gender::Feminine),
    ("pessoa que se infectou com {disease}", "pessoas que se infectaram com {disease}", Gender::Feminine),
    ("milionário", "milionários", Gender::Masculine),
    ("bilionário", "bilionários", Gender::Masculine),
    ("traficante", "traficantes", Gender::Masculine),
    ("minerador de Bitcoin", "mineradores de Bitcoin", Gender::Masculine),
    ("investidor", "investidores", Gender::Masculine),
    ("usuário de drogas", "usuários de drogas", Gender::Masculine),
    ("usuário de {drug}", "usuários de {drug}", Gender::Masculine),
    ("viciado em {drug}", "viciados em {drug}", Gender::Masculine),
    ("anarcocapitalista", "anarcocapitalistas", Gender::Masculine),
    ("nazista", "nazistas", Gender::Masculine),
    ("senador", "senadores", Gender::Masculine),
    ("grávida", "grávidas", Gender::Feminine),
    ("morador de rua", "moradores de rua", Gender::Masculine),
    ("vítima de {problem}", "vítimas de {problem}", Gender::Feminine),
    ("estudante", "estudantes", Gender::Masculine),
    ("funcionário público", "funcionários públicos", Gender::Masculine),
    ("professor", "professores", Gender::Masculine),
    ("influencer", "influencers", Gender::Masculine),
    ("tiktoker", "tiktokers", Gender::Masculine),
    ("youtuber", "youtubers", Gender::Masculine),
    ("gamer", "gamers", Gender::Masculine),
    ("otaku", "otakus", Gender::Masculine),
    ("cosplayer", "cosplayers", Gender::Masculine),
    ("streamer", "streamers", Gender::Masculine),
    ("programador", "programadores", Gender::Masculine),
    ("hacker ético", "hackers éticos", Gender::Masculine),
    ("desenvolvedor full-stack", "desenvolvedores full-stack", Gender::Masculine),
    ("analista de memes", "analistas de memes", Gender::Masculine),
    ("especialista em NFTs", "especialistas em NFTs", Gender::Masculine),
    ("trader de criptomoedas", "traders de criptomoedas", Gender::Masculine),
    ("coach quântico", "coaches quânticos", Gender::Masculine),
    ("terapeuta holístico", "terapeutas holísticos", Gender::Masculine),
    ("curador de conteúdo", "curadores de conteúdo", Gender::Masculine),
    ("pessoa que usa Linux", "pessoas que usam Linux", Gender::Feminine),
    ("usuário de iPhone", "usuários de iPhone", Gender::Masculine),
    ("fanático por café", "fanáticos por café", Gender::Masculine),
    ("vegano", "veganos", Gender::Masculine),
    ("crossfiteiro", "crossfiteiros", Gender::Masculine),
    ("praticante de yoga", "praticantes de yoga", Gender::Masculine),
    ("minimalista digital", "minimalistas digitais", Gender::Masculine),
];

/// Things, as (singular, plural, gender, article).
pub(crate) const OBJECTS: &[(&str, &str, Gender, &str)] = &[
    ("álcool em gel", "álcoois em gel", Gender::Masculine, "o"),
    ("máscara de proteção", "máscaras de proteção", Gender::Feminine, "a"),
    ("telefone celular", "telefones celulares", Gender::Masculine, "o"),
    ("água", "águas", Gender::Feminine, "a"),
    ("comida", "comidas", Gender::Feminine, "a"),
    ("cópia do Código de Defesa do Consumidor", "cópias do Código de Defesa do Consumidor", Gender::Feminine, "a"),
    ("arma", "armas", Gender::Feminine, "a"),
    ("medicamento", "medicamentos", Gender::Masculine, "o"),
    ("ingresso", "ingressos", Gender::Masculine, "o"),
    ("absorvente", "absorventes", Gender::Masculine, "o"),
    ("faca", "facas", Gender::Feminine, "a"),
    ("bitcoin", "bitcoins", Gender::Masculine, "o"),
    ("dogecoin", "dogecoins", Gender::Masculine, "o"),
    ("emoji de berinjela", "emojis de berinjela", Gender::Masculine, "o"),
    ("filtro do Instagram", "filtros do Instagram", Gender::Masculine, "o"),
    ("carregador de iPhone", "carregadores de iPhone", Gender::Masculine, "o"),
    ("fone sem fio", "fones sem fio", Gender::Masculine, "o"),
    ("powerbank", "powerbanks", Gender::Masculine, "o"),
    ("selfie stick", "selfie sticks", Gender::Masculine, "o"),
    ("óculos de realidade virtual", "óculos de realidade virtual", Gender::Masculine, "o"),
    ("drone", "drones", Gender::Masculine, "o"),
    ("smartwatch", "smartwatches", Gender::Masculine, "o"),
    ("protetor solar FPS 60+", "protetores solares FPS 60+", Gender::Masculine, "o"),
    ("copo stanley", "copos stanley", Gender::Masculine, "o"),
    ("tênis de corrida", "tênis de corrida", Gender::Masculine, "o"),
    ("suplemento de whey protein", "suplementos de whey protein", Gender::Masculine, "o"),
    ("livro de autoajuda", "livros de autoajuda", Gender::Masculine, "o"),
    ("cristal energético", "cristais energéticos", Gender::Masculine, "o"),
    ("óleo essencial", "óleos essenciais", Gender::Masculine, "o"),
    ("livro", "livros", Gender::Masculine, "o"),
    ("remédio", "remédios", Gender::Masculine, "o"),
    ("vacina", "vacinas", Gender::Feminine, "a"),
    ("cigarro", "cigarros", Gender::Masculine, "o"),
    ("cigarro eletrônico", "cigarros eletrônicos", Gender::Masculine, "o"),
];

/// Places and businesses, as (singular, plural, gender, article).
pub(crate) const ESTABLISHMENTS: &[(&str, &str, Gender, &str)] = &[
    ("restaurante", "restaurantes", Gender::Masculine, "o"),
    ("farmácia", "farmácias", Gender::Feminine, "a"),
    ("posto de gasolina", "postos de gasolina", Gender::Masculine, "o"),
    ("puteiro", "puteiros", Gender::Masculine, "o"),
    ("supermercado", "supermercados", Gender::Masculine, "o"),
    ("casa de show", "casas de show", Gender::Feminine, "a"),
    ("bar", "bares", Gender::Masculine, "o"),
    ("estacionamento", "estacionamentos", Gender::Masculine, "o"),
    ("banco", "bancos", Gender::Masculine, "o"),
    ("cinema", "cinemas", Gender::Masculine, "o"),
    ("motel", "motéis", Gender::Masculine, "o"),
    ("estabelecimento com área fechada", "estabelecimentos com áreas fechadas", Gender::Masculine, "o"),
    ("lanchonete", "lanchonetes", Gender::Feminine, "a"),
    ("hospital", "hospitais", Gender::Masculine, "o"),
    ("casa de massagem", "casas de massagem", Gender::Feminine, "a"),
    ("igreja", "igrejas", Gender::Feminine, "a"),
    ("hotel", "hotéis", Gender::Masculine, "o"),
    ("coworking", "coworkings", Gender::Masculine, "o"),
    ("startup", "startups", Gender::Feminine, "a"),
    ("centro de distribuição", "centros de distribuição", Gender::Masculine, "o"),
    ("dark kitchen", "dark kitchens", Gender::Feminine, "a"),
    ("loja de conveniência", "lojas de conveniência", Gender::Feminine, "a"),
    ("loja de departamentos", "lojas de departamentos", Gender::Feminine, "a"),
    ("outlet", "outlets", Gender::Masculine, "o"),
    ("shopping center", "shopping centers", Gender::Masculine, "o"),
    ("food truck", "food trucks", Gender::Masculine, "o"),
    ("café gourmet", "cafés gourmets", Gender::Masculine, "o"),
    ("barbearia moderna", "barbearias modernas", Gender::Feminine, "a"),
    ("salão de beleza", "salões de beleza", Gender::Masculine, "o"),
    ("academia de crossfit", "academias de crossfit", Gender::Feminine, "a"),
    ("estúdio de yoga", "estúdios de yoga", Gender::Masculine, "o"),
    ("clínica de estética", "clínicas de estética", Gender::Feminine, "a"),
    ("pet shop", "pet shops", Gender::Masculine, "o"),
    ("loja de produtos naturais", "lojas de produtos naturais", Gender::Feminine, "a"),
    ("escape room", "escape rooms", Gender::Feminine, "a"),
    ("casa de jogos", "casas de jogos", Gender::Feminine, "a"),
    ("lan house", "lan houses", Gender::Feminine, "a"),
    ("loja de eletrônicos", "lojas de eletrônicos", Gender::Feminine, "a"),
];

/// Things people do, as (infinitive, third person, plural).
pub(crate) const PERSON_ACTIONS: &[(&str, &str, &str)] = &[
    (
        "utilizar {object} dentro de {establishment} em horário comercial",
        "utilize {object} dentro de {establishment} em horário comercial",
        "utilizem {object} dentro de {establishment} em horário comercial",
    ),
    (
        "agredir {subject}",
        "agrida {subject}",
        "agridam {subject}",
    ),
    (
        "praticar tentativa de homicídio",
        "pratique tentativa de homicídio",
        "pratiquem tentativa de homicídio",
    ),
    (
        "criar leis",
        "crie leis",
        "criem leis",
    ),
    (
        "fumar",
        "fume",
        "fumem",
    ),
    (
        "fumar em {establishment}",
        "fume em {establishment}",
        "fumem em {establishment}",
    ),
    (
        "dirigir sob efeito de {drug}",
        "dirija sob efeito de {drug}",
        "dirijam sob efeito de {drug}",
    ),
    (
        "praticar atividades ao ar livre",
        "pratique atividades ao ar livre",
        "pratiquem atividades ao ar livre",
    ),
    (
        "postar memes no horário comercial",
        "poste memes no horário comercial",
        "postem memes no horário comercial",
    ),
    (
        "fazer lives durante reuniões",
        "faça lives durante reuniões",
        "façam lives durante reuniões",
    ),
    (
        "usar filtros do Instagram em documentos oficiais",
        "use filtros do Instagram em documentos oficiais",
        "usem filtros do Instagram em documentos oficiais",
    ),
    (
        "fazer unboxing em {establishment}",
        "faça unboxing em {establishment}",
        "façam unboxing em {establishment}",
    ),
    (
        "assistir TikTok durante o trabalho",
        "assista TikTok durante o trabalho",
        "assistam TikTok durante o trabalho",
    ),
    (
        "fazer cosplay em ambiente profissional",
        "faça cosplay em ambiente profissional",
        "façam cosplay em ambiente profissional",
    ),
    (
        "conversar sobre criptomoedas por mais de 5 minutos",
        "converse sobre criptomoedas por mais de 5 minutos",
        "conversem sobre criptomoedas por mais de 5 minutos",
    ),
    (
        "falar mal do pineapple na pizza",
        "fale mal do pineapple na pizza",
        "falem mal do pineapple na pizza",
    ),
    (
        "usar óculos de sol em ambiente fechado",
        "use óculos de sol em ambiente fechado",
        "usem óculos de sol em ambiente fechado",
    ),
    (
        "jogar Pokemon GO durante expediente",
        "jogue Pokemon GO durante expediente",
        "joguem Pokemon GO durante expediente",
    ),
    (
        "fazer carinha de emoji em fotos oficiais",
        "faça carinha de emoji em fotos oficiais",
        "façam carinha de emoji em fotos oficiais",
    ),
    (
        "explicar NFTs para pessoas desinteressadas",
        "explique NFTs para pessoas desinteressadas",
        "expliquem NFTs para pessoas desinteressadas",
    ),
];

/// Things establishments do.
pub(crate) const ESTABLISHMENT_ACTIONS: &[(&str, &str, &str)] = &[
    (
        "disponibilizar {object} grátis para {subject}",
        "disponibilize {object} grátis para {subject}",
        "disponibilizem {object} grátis para {subject}",
    ),
    (
        "oferecer desconto de {number,0,100,0}% para {subject}",
        "ofereça desconto de {number,0,100,0}% para {subject}",
        "ofereçam desconto de {number,0,100,0}% para {subject}",
    ),
    (
        "oferecer desconto de {number,0,100,0}% em {object} para {subject}",
        "ofereça desconto de {number,0,100,0}% em {object} para {subject}",
        "ofereçam desconto de {number,0,100,0}% em {object} para {subject}",
    ),
    (
        "instalar Wi-Fi gratuito com velocidade mínima de {number,10,1000,0} Mbps",
        "instale Wi-Fi gratuito com velocidade mínima de {number,10,1000,0} Mbps",
        "instalem Wi-Fi gratuito com velocidade mínima de {number,10,1000,0} Mbps",
    ),
    (
        "aceitar pagamento em criptomoedas",
        "aceite pagamento em criptomoedas",
        "aceitem pagamento em criptomoedas",
    ),
    (
        "ter uma área instagramável obrigatória",
        "tenha uma área instagramável obrigatória",
        "tenham uma área instagramável obrigatória",
    ),
    (
        "tocar apenas música brasileira dos anos 80",
        "toque apenas música brasileira dos anos 80",
        "toquem apenas música brasileira dos anos 80",
    ),
    (
        "servir café expresso de graça para {subject}",
        "sirva café expresso de graça para {subject}",
        "sirvam café expresso de graça para {subject}",
    ),
    (
        "disponibilizar carregador universal gratuito",
        "disponibilize carregador universal gratuito",
        "disponibilizem carregador universal gratuito",
    ),
    (
        "ter banheiro com papel higiênico",
        "tenha banheiro com papel higiênico",
        "tenham banheiro com papel higiênico",
    ),
    (
        "oferecer aulas de TikTok para {subject} acima de 60 anos",
        "ofereça aulas de TikTok para {subject} acima de 60 anos",
        "ofereçam aulas de TikTok para {subject} acima de 60 anos",
    ),
    (
        "disponibilizar mesa de ping-pong para clientes",
        "disponibilize mesa de ping-pong para clientes",
        "disponibilizem mesa de ping-pong para clientes",
    ),
];

/// Public money sources.
pub(crate) const RESOURCES: &[&str] = &[
    "PIB",
    "valor arrecadado com impostos",
    "dinheiro do Auxílio Brasil",
    "verba da merenda escolar",
    "fundos de campanha eleitoral",
    "royalties do petróleo",
    "arrecadação dos pedágios",
    "lucros das loterias",
    "multas de trânsito",
    "FGTS abandonado",
    "dinheiro esquecido no Banco Central",
    "taxa de fiscalização da ANATEL",
    "contribuição sindical obrigatória",
    "arrecadação do ICMS sobre combustíveis",
    "Bolsa Família",
    "dinheiro do Fundo de Garantia",
    "imposto sobre {subject:plural}",
    "imposto sobre {establishment:plural}",
    "imposto sobre {object:plural}",
    "imposto sobre importação de {object:plural}",
];

/// Social problems a bill can fight.
pub(crate) const PROBLEMS: &[&str] = &[
    "pandemia de {disease}",
    "racismo",
    "homofobia",
    "heterofobia",
    "machismo",
    "transfobia",
    "anarcocapitalismo",
    "nazismo",
    "fascismo",
    "impostômetro",
    "liberalismo econômico",
    "homosexualismo",
    "tráfico de drogas",
    "tráfico de {drug:singular}",
    "violência contra {subject}",
    "aquecimento global",
    "vício em redes sociais",
    "fake news",
    "cyberbullying",
    "procrastinação digital",
    "ansiedade por notificações",
    "síndrome do impostor",
    "burnout profissional",
    "nomofobia (medo de ficar sem celular)",
    "FOMO (fear of missing out)",
    "addiction em séries da Netflix",
    "dependência de delivery",
    "síndrome do like infinito",
    "depressão pós-Black Friday",
    "ansiedade de não ter iPhone",
    "estresse por wifi lento",
    "trauma de bateria baixa",
    "síndrome de timeline vazia",
    "depressão por stories não visualizados",
];

pub(crate) const DISEASES: &[&str] = &[
    "COVID-19",
    "coronavirus",
    "dengue",
    "zika",
    "chikungunya",
    "malária",
    "peste negra",
    "AIDS",
    "HIV",
    "Síndrome de Estocolmo",
    "estatismo",
    "anarcocapitalismo",
    "síndrome de Down",
    "síndrome de Tourette",
    "síndrome de Asperger",
    "autismo",
    "autismo leve",
    "autismo severo",
    "síndrome do impostor",
    "burnout",
    "depressão",
    "ansiedade",
    "transtorno de déficit de atenção",
    "transtorno obsessivo-compulsivo",
    "transtorno bipolar",
    "esquizofrenia",
    "transtorno de personalidade múltipla",
    "transtorno de estresse pós-traumático",
    "transtorno de ansiedade generalizada",
    "transtorno de pânico",
    "fobia social",
];

pub(crate) const DRUGS: &[&str] = &[
    "maconha",
    "crack",
    "heroína",
    "cocaína",
    "anarcocapitalismo",
    "cerveja",
    "álcool",
    "açúcar",
    "cafeína",
    "dopamina digital",
    "likes do Instagram",
    "notificações do WhatsApp",
    "séries da Netflix",
    "compras online",
    "whey protein",
    "suplemento pré-treino",
    "cigarro eletrônico",
    "vape de morango",
    "pílula de emagrecimento",
    "remédio para dormir",
    "remédio para acordar",
];
